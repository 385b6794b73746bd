//! `passman shell` (alias `i`) — interactive command loop.
//!
//! Every line is parsed as a passman command line and run against the
//! same `Context`, so the password is asked for once per shell.  Lines
//! are split with shell quoting rules.  A failing command prints its
//! error and the loop continues.

use clap::Parser;

use crate::cli::output;
use crate::cli::{read_stdin_line, stdin_is_terminal, Cli, Commands, Context};
use crate::errors::{PassmanError, Result};

const PROMPT: &str = "passman$";

/// Execute the `shell` command.
pub fn execute(ctx: &mut Context) -> Result<()> {
    // Unlock up front; a wrong password ends the shell immediately.
    let (_, directory) = ctx.open()?;
    output::info(&format!(
        "{} service(s). Type `help` for commands, `exit` to quit.",
        directory.len()
    ));

    while let Some(line) = next_line()? {
        let line = line.trim();
        match line {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        let Some(words) = shlex::split(line) else {
            output::error("Unbalanced quotes.");
            continue;
        };
        let args = std::iter::once("passman".to_string()).chain(words);
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                // Covers `help` and `--help` too.
                let _ = e.print();
                continue;
            }
        };

        if matches!(cli.command, Commands::Shell) {
            output::warning("Already in interactive mode.");
            continue;
        }

        if let Err(e) = super::run(ctx, &cli.command) {
            output::error(&e.to_string());
        }
    }

    output::info("Goodbye");
    Ok(())
}

/// Next command line, or `None` at end of input.
fn next_line() -> Result<Option<String>> {
    if !stdin_is_terminal() {
        return read_stdin_line();
    }

    match dialoguer::Input::<String>::new()
        .with_prompt(PROMPT)
        .allow_empty(true)
        .interact_text()
    {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(PassmanError::CommandFailed(format!("input prompt: {e}"))),
    }
}
