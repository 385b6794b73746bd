//! `passman init` — create the config file and an empty password file.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_new_password, stdin_is_terminal, Context, PASSWORD_ENV};
use crate::errors::{PassmanError, Result};
use crate::store::Session;

/// Execute the `init` command.
pub fn execute(ctx: &mut Context, force: bool) -> Result<()> {
    // 1. Write the default config if there is none yet.
    if !ctx.config_path.exists() {
        ctx.settings.save(&ctx.config_path)?;
        output::info(&format!("Wrote config to {}", ctx.config_path.display()));
    }

    let store = ctx.store();

    // 2. An existing file is opened with the current password so we
    //    never silently clobber services.
    if store.exists() && !force {
        let (_, existing) = ctx.open()?;
        if !existing.is_empty() {
            if !stdin_is_terminal() {
                return Err(PassmanError::CommandFailed(format!(
                    "{} holds {} service(s); pass --force to replace it",
                    store.path().display(),
                    existing.len()
                )));
            }

            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Overwrite existing password file ({} services)?",
                    existing.len()
                ))
                .default(false)
                .interact()
                .map_err(|e| PassmanError::CommandFailed(format!("confirm prompt: {e}")))?;

            if !confirmed {
                return Err(PassmanError::UserCancelled);
            }
        }
    } else {
        // 3. Fresh file: choose a password (with confirmation).
        ctx.set_session(Session::from_prompt(|| prompt_new_password(PASSWORD_ENV))?);
    }

    // 4. Write the empty directory and read it back.
    let session = ctx.session()?;
    store.initialize(session, true)?;

    output::success(&format!(
        "Initialized {} ({} envelope)",
        store.path().display(),
        store.format()
    ));
    output::tip("Run `passman add <service> -g` to add a service with a generated password.");

    Ok(())
}
