//! `passman add` — add or update a service.

use crate::cli::output;
use crate::cli::{read_stdin_line, stdin_is_terminal, Context};
use crate::directory::ServiceRecord;
use crate::errors::{PassmanError, Result};

/// Execute the `add` command.
///
/// `meta` is `None` when `-m` was not given, `Some(None)` for a bare
/// `-m` (prompt) and `Some(Some(text))` for inline metadata.
pub fn execute(
    ctx: &mut Context,
    name: &str,
    generate: Option<&str>,
    password: bool,
    meta: Option<Option<&str>>,
) -> Result<()> {
    let (store, mut directory) = ctx.open()?;

    // Start from the existing record so unspecified fields are kept.
    let existed = directory.contains(name);
    let mut record = directory
        .get(name)
        .cloned()
        .unwrap_or_else(|| ServiceRecord::named(name));

    if let Some(token) = generate {
        record.secret = ctx.settings.generator(token).generate()?;
        output::info(&format!("Generated a new password for '{name}'"));
    }

    if password {
        record.secret = read_secret(name)?;
    }

    match meta {
        Some(Some(text)) => record.meta = text.to_string(),
        Some(None) => record.meta = read_meta(name)?,
        None => {}
    }

    if record.secret.is_empty() {
        output::warning(&format!("'{name}' has no password (use -g or -p)."));
    }

    directory.put(record);
    ctx.save(&store, &directory)?;

    let verb = if existed { "Updated" } else { "Added" };
    output::success(&format!("{verb} '{name}' ({} total)", directory.len()));

    Ok(())
}

/// Masked prompt, or one line of piped stdin.
fn read_secret(name: &str) -> Result<String> {
    if !stdin_is_terminal() {
        return read_stdin_line()?.ok_or_else(|| {
            PassmanError::CommandFailed(format!("no password for {name} on stdin"))
        });
    }

    dialoguer::Password::new()
        .with_prompt(format!("Password for {name}"))
        .interact()
        .map_err(|e| PassmanError::CommandFailed(format!("password prompt: {e}")))
}

fn read_meta(name: &str) -> Result<String> {
    if !stdin_is_terminal() {
        return Ok(read_stdin_line()?.unwrap_or_default());
    }

    dialoguer::Input::<String>::new()
        .with_prompt(format!("Meta for {name}"))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassmanError::CommandFailed(format!("input prompt: {e}")))
}
