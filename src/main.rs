#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Result;
use hashdrill::{cli, output};

fn main() -> Result<()> {
    let matches = cli::command().get_matches();

    // Log to stderr, stdout only carries results
    hashdrill::setup(Some(cli::log_level(&matches)));

    let format = cli::format(&matches)?;
    let outcome = cli::run(&matches)?;
    println!("{}", output::render(&outcome, format)?);
    Ok(())
}
