//! `passman repass` — change the encryption password.
//!
//! Decrypts the file with the current password and writes it back
//! under the new one.  The session switches to the new password, so
//! later commands in an interactive shell keep working.

use crate::cli::output;
use crate::cli::{prompt_new_password, Context, NEW_PASSWORD_ENV};
use crate::errors::Result;

/// Execute the `repass` command.
pub fn execute(ctx: &mut Context) -> Result<()> {
    // 1. Make sure the current password opens the file.
    output::info("Enter your current password.");
    let (store, directory) = ctx.open()?;

    // 2. Prompt for the new password.
    output::info("Choose your new password.");
    let new_password = prompt_new_password(NEW_PASSWORD_ENV)?;

    // 3. Re-encrypt and switch the session over.
    store.change_passphrase(ctx.session()?, new_password)?;

    output::success(&format!(
        "Password changed ({} services re-encrypted)",
        directory.len()
    ));
    Ok(())
}
