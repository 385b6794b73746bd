//! `passman config` — update and show settings.

use std::path::Path;

use crate::cli::output;
use crate::cli::Context;
use crate::errors::Result;
use crate::store::EnvelopeFormat;

/// Execute the `config` command.
pub fn execute(
    ctx: &mut Context,
    file: Option<&Path>,
    dictionary: Option<&Path>,
    envelope: Option<EnvelopeFormat>,
) -> Result<()> {
    let mut changed = false;

    if let Some(path) = file {
        ctx.settings.passwd_file = path.to_path_buf();
        changed = true;
    }
    if let Some(path) = dictionary {
        ctx.settings.dictionary = path.to_path_buf();
        changed = true;
    }
    if let Some(format) = envelope {
        ctx.settings.envelope = format;
        changed = true;
    }

    if changed {
        ctx.settings.save(&ctx.config_path)?;
        output::success(&format!("Saved {}", ctx.config_path.display()));
        if envelope.is_some() {
            output::tip("The password file is rewritten in the new envelope on the next save.");
        }
    }

    println!("{}", ctx.settings.passwd_file.display());
    output::info(&format!("dictionary: {}", ctx.settings.dictionary.display()));
    output::info(&format!("envelope:   {}", ctx.settings.envelope));

    Ok(())
}
