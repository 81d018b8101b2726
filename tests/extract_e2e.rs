// tests/extract_e2e.rs
//
// Full pipeline on synthetic pages: HTML in, records out, one walker
// per table generation. Gazetteers are synthetic fixtures so the tests
// run offline and deterministically.

use std::collections::HashSet;

use mdl_scrape::gazetteer::Gazetteer;
use mdl_scrape::resolve::Ward;
use mdl_scrape::specs::{fixed_columns, shifted_columns, tag_scan};
use mdl_scrape::table::{collect_tables, Section};

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn gazetteer() -> Gazetteer {
    Gazetteer::from_sets(
        set(&["Anna", "Hans", "Maria", "Karl", "Ute"]),
        set(&["Köln", "Aachen", "Gütersloh", "Soest"]),
        set(&["Freiherr", "Graf", "Dr", "Prof"]),
    )
    .unwrap()
}

const PARTIES_14: [&str; 5] = ["CDU", "SPD", "FDP", "Grüne", "Fraktionslos"];
const PARTIES_15: [&str; 5] = ["CDU", "SPD", "FDP", "Grüne", "Linke"];
const PARTIES_16: [&str; 5] = ["CDU", "SPD", "FDP", "GRÜNE", "PIRATEN"];

#[test]
fn fixed_column_page_end_to_end() {
    let doc = r#"
        <h2><span id="Abgeordnete">Abgeordnete</span></h2>
        <table>
          <tr><th>Name</th><th>geb.</th><th>Partei</th><th>Beruf</th><th>Wahlkreis</th></tr>
          <tr>
            <td>Anna Schmidt</td><td>1961</td><td>SPD</td><td></td><td>Köln I</td>
          </tr>
          <tr>
            <td>Schmidt, Karl!Karl Schmidt</td><td>1950</td><td>CDU</td><td></td><td>Landesliste</td>
          </tr>
          <tr>
            <td>Unbekannt Niemand</td><td></td><td>SPD</td><td></td><td>Köln II</td>
          </tr>
        </table>
    "#;
    let tables = collect_tables(doc);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].0, Section::Members);

    let gaz = gazetteer();
    let records: Vec<_> = fixed_columns::records(&tables[0].1, 14, &PARTIES_14, &gaz).collect();

    // header row and the unknown-first-name row are skipped
    assert_eq!(records.len(), 2);
    assert_eq!(tables[0].1.rows.len() - records.len(), 2);

    assert_eq!(records[0].name.first_name, "Anna");
    assert_eq!(records[0].name.last_name, "Schmidt");
    assert_eq!(records[0].party, "SPD");
    assert_eq!(records[0].ward, Ward::District("Köln I".to_string()));

    // sort key discarded, list seat resolved to the sentinel
    assert_eq!(records[1].name.first_name, "Karl");
    assert_eq!(records[1].ward, Ward::AtLarge);
    assert_eq!(records[1].key(), "Schmidt_Karl_Landesliste_14");
}

#[test]
fn tag_scanned_page_end_to_end() {
    let doc = r#"
        <h2>Abgeordnete</h2>
        <table><tbody>
          <tr>
            <td><a href="/wiki/Hans_Heide">Hans von der Heide</a></td>
            <td>SPD</td>
            <td><a href="/wiki/K%C3%B6ln_I">Köln I</a></td>
          </tr>
          <tr>
            <td><span>Anna Schmidt</span></td>
            <td>CDU</td>
            <td><a>Rhein-Sieg-Kreis II</a></td>
          </tr>
          <tr>
            <td><a>Maria Wolf</a></td>
            <td>Linke</td>
            <td></td>
          </tr>
        </tbody></table>
    "#;
    let tables = collect_tables(doc);
    let gaz = gazetteer();
    let records: Vec<_> = tag_scan::records(&tables[0].1, 15, &PARTIES_15, &gaz).collect();

    // the third row has no ward fragment at all and is dropped
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].name.preposition.as_deref(), Some("von der"));
    assert_eq!(records[0].name.last_name, "Heide");
    assert_eq!(records[0].party, "SPD");
    assert_eq!(records[0].ward, Ward::District("Köln I".to_string()));

    assert_eq!(records[1].ward, Ward::District("Rhein-Sieg-Kreis II".to_string()));
    assert_eq!(records[1].party, "CDU");
}

#[test]
fn shifted_page_covers_departed_members_too() {
    let doc = r#"
        <h2>Abgeordnete</h2>
        <table>
          <tr><td>p</td><td>Anna Schmidt</td><td>1961</td><td>GRÜNE</td><td>Landesliste Aachen</td></tr>
        </table>
        <h2>Ausgeschiedene Abgeordnete</h2>
        <table>
          <tr><td>p</td><td>Dr. Hans Maier</td><td>1950</td><td>PIRATEN</td><td></td></tr>
        </table>
    "#;
    let tables = collect_tables(doc);
    assert_eq!(tables.len(), 2);

    let gaz = gazetteer();
    let mut records = Vec::new();
    for (_, table) in &tables {
        records.extend(shifted_columns::records(table, 16, &PARTIES_16, &gaz));
    }
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].ward, Ward::District("Aachen".to_string()));
    assert_eq!(records[0].party, "GRÜNE");

    assert_eq!(records[1].academic_title.as_deref(), Some("Dr."));
    assert_eq!(records[1].name.peer_title, None);
    assert_eq!(records[1].ward, Ward::AtLarge);
}

#[test]
fn emission_order_equals_row_order_across_skips() {
    let doc = r#"
        <h2>Abgeordnete</h2>
        <table>
          <tr><td>Ute Wolf</td><td></td><td>FDP</td><td></td><td>Soest I</td></tr>
          <tr><td>broken row</td></tr>
          <tr><td>Karl Wolf</td><td></td><td>CDU</td><td></td><td>Soest II</td></tr>
          <tr><td>Anna Wolf</td><td></td><td>nicht eine Partei</td><td></td><td>Soest III</td></tr>
          <tr><td>Maria Wolf</td><td></td><td>SPD</td><td></td><td>Soest IV</td></tr>
        </table>
    "#;
    let tables = collect_tables(doc);
    let gaz = gazetteer();
    let records: Vec<_> = fixed_columns::records(&tables[0].1, 14, &PARTIES_14, &gaz).collect();

    // emitted = scanned - failed, order preserved across the gaps
    assert_eq!(tables[0].1.rows.len(), 5);
    assert_eq!(records.len(), 3);
    let firsts: Vec<_> = records.iter().map(|m| m.name.first_name.as_str()).collect();
    assert_eq!(firsts, ["Ute", "Karl", "Maria"]);
}

#[test]
fn four_token_name_with_title_and_particle() {
    let doc = r#"
        <h2>Abgeordnete</h2>
        <table>
          <tr><td>Hans Freiherr von Heide</td><td></td><td>CDU</td><td></td><td>Gütersloh III</td></tr>
        </table>
    "#;
    let tables = collect_tables(doc);
    let gaz = gazetteer();
    let records: Vec<_> = fixed_columns::records(&tables[0].1, 14, &PARTIES_14, &gaz).collect();
    assert_eq!(records.len(), 1);

    let name = &records[0].name;
    assert_eq!(name.peer_title.as_deref(), Some("Freiherr"));
    assert_eq!(name.preposition.as_deref(), Some("von"));
    assert_eq!(name.last_name, "Heide");
    assert_eq!(records[0].name.full(), "Freiherr Hans von Heide");
}
