//! `passman show` — print passwords and metadata in a table.

use crate::cli::output;
use crate::cli::Context;
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(ctx: &mut Context, prefix: Option<&str>) -> Result<()> {
    let (_, directory) = ctx.open()?;
    let matched = directory.search(prefix.unwrap_or_default());

    output::print_services_table(&matched);

    Ok(())
}
