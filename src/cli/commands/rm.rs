//! `passman rm` — remove services.

use crate::cli::output;
use crate::cli::Context;
use crate::errors::Result;

/// Execute the `rm` command.
pub fn execute(ctx: &mut Context, names: &[String]) -> Result<()> {
    let (store, mut directory) = ctx.open()?;

    let mut removed = 0;
    for name in names {
        if directory.remove(name).is_some() {
            removed += 1;
        } else {
            output::warning(&format!("'{name}' not found"));
        }
    }

    if removed > 0 {
        ctx.save(&store, &directory)?;
    }

    output::success(&format!(
        "Removed {removed} service(s) ({} left)",
        directory.len()
    ));

    Ok(())
}
