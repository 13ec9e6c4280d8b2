// Binary entry point - import modules directly
mod cli;
mod demo;
mod quiz;
mod session;
mod utils;

use std::io;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use session::Session;

fn main() -> Result<()> {
    // No flags beyond --help/--version; a bare invocation runs the drill.
    Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
