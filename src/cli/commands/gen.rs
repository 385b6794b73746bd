//! `passman gen` — print a generated password without storing it.

use crate::cli::Context;
use crate::errors::Result;

/// Execute the `gen` command.
pub fn execute(ctx: &Context, token: &str) -> Result<()> {
    let password = ctx.settings.generator(token).generate()?;
    println!("{password}");
    Ok(())
}
