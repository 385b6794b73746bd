//! `passman ls` — list service names.

use crate::cli::output;
use crate::cli::Context;
use crate::errors::Result;

/// Execute the `ls` command.
pub fn execute(ctx: &mut Context, prefix: Option<&str>) -> Result<()> {
    let (_, directory) = ctx.open()?;
    output::print_names(&directory.search(prefix.unwrap_or_default()));
    Ok(())
}
