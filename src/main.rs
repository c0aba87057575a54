//! This is the main entry point for dbgcmd.

use dbgcmd::cli;

fn main() -> anyhow::Result<()> {
    cli::parse(None)?;
    Ok(())
}
