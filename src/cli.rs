// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::params::Params;
use crate::csv::Delim;

pub fn parse() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_args(&mut params, env::args().skip(1))?;
    Ok(params)
}

fn parse_args(
    params: &mut Params,
    mut args: impl Iterator<Item = String>,
) -> Result<(), Box<dyn std::error::Error>> {
    while let Some(a) = args.next() {
        match a.as_str() {
            "-t" | "--term" => {
                let v: u8 = args.next().ok_or("Missing value for --term")?.parse()?;
                params.term = Some(v);
            }
            "--scrape" => params.scrape = true,
            "--ward-details" => params.ward_details = true,
            "--show" => params.show = true,
            "--find" => {
                params.find = Some(args.next().ok_or("Missing value for --find")?);
            }
            "--party" => {
                params.party = Some(args.next().ok_or("Missing value for --party")?);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(args: &[&str]) -> Params {
        let mut p = Params::new();
        parse_args(&mut p, args.iter().map(|a| s!(*a))).unwrap();
        p
    }

    #[test]
    fn term_and_actions() {
        let p = parsed(&["--term", "16", "--scrape", "--ward-details"]);
        assert_eq!(p.term, Some(16));
        assert!(p.scrape);
        assert!(p.ward_details);
        assert!(!p.show);
    }

    #[test]
    fn filters_and_format() {
        let p = parsed(&["-t", "17", "--show", "--party", "SPD", "--format", "tsv"]);
        assert_eq!(p.party.as_deref(), Some("SPD"));
        assert_eq!(p.format, Delim::Tsv);
    }

    #[test]
    fn unknown_args_are_rejected() {
        let mut p = Params::new();
        assert!(parse_args(&mut p, [s!("--bogus")].into_iter()).is_err());
        assert!(parse_args(&mut p, [s!("--term")].into_iter()).is_err());
        assert!(parse_args(&mut p, [s!("--term"), s!("many")].into_iter()).is_err());
    }
}
