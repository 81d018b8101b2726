// src/bin/cli.rs
use color_eyre::eyre::eyre;

use mdl_scrape::{cli, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let params = cli::parse().map_err(|e| eyre!("{e}"))?;
    runner::run(&params).map_err(|e| eyre!("{e}"))?;
    Ok(())
}
