//! `passman cp` — copy a service's password to the clipboard.

use arboard::Clipboard;

use crate::cli::output;
use crate::cli::Context;
use crate::errors::{PassmanError, Result};

/// Execute the `cp` command.
pub fn execute(ctx: &mut Context, name: &str) -> Result<()> {
    let (_, directory) = ctx.open()?;
    let record = directory
        .get(name)
        .ok_or_else(|| PassmanError::ServiceNotFound(name.to_string()))?;

    let mut clipboard =
        Clipboard::new().map_err(|e| PassmanError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(record.secret.as_str())
        .map_err(|e| PassmanError::ClipboardError(e.to_string()))?;

    output::success(&format!("Copied the password for '{name}' to the clipboard"));
    Ok(())
}
