//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::directory::ServiceDirectory;
use crate::errors::{PassmanError, Result};
use crate::store::{EnvelopeFormat, Session, Store};

/// Environment variable checked before prompting for the passphrase.
pub const PASSWORD_ENV: &str = "PASSMAN_PASSWORD";

/// Environment variable checked before prompting for a new passphrase
/// in `repass`.
pub const NEW_PASSWORD_ENV: &str = "PASSMAN_NEW_PASSWORD";

/// passman: a local encrypted password manager.
#[derive(Parser)]
#[command(name = "passman", about = "Encrypted password manager", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.passman.toml)
    #[arg(long, env = "PASSMAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize the password file (and config, if missing)
    Init {
        /// Replace an existing password file without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Configure the password manager
    Config {
        /// Password file location
        #[arg(short = 'd', long)]
        file: Option<PathBuf>,
        /// Word list used by word-mode generation
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// Envelope used when writing the password file
        #[arg(long, value_enum)]
        envelope: Option<EnvelopeFormat>,
    },

    /// Add or update a service
    #[command(after_help = GENERATE_HELP)]
    Add {
        /// Service name (e.g. github.com)
        name: String,
        /// Generate a password from TOKEN (e.g. -glunc24, -gw16)
        #[arg(
            short = 'g',
            long = "generate",
            value_name = "TOKEN",
            num_args = 0..=1,
            default_missing_value = ""
        )]
        generate: Option<String>,
        /// Enter the password (prompt, or one line of piped stdin)
        #[arg(short = 'p', long = "password")]
        password: bool,
        /// Attach metadata (inline, or prompt when no value is given)
        #[arg(short = 'm', long = "meta", value_name = "TEXT", num_args = 0..=1)]
        meta: Option<Option<String>>,
    },

    /// List service names
    Ls {
        /// Only names starting with this prefix (a trailing * is ignored)
        prefix: Option<String>,
    },

    /// Show passwords and metadata
    Show {
        /// Only services starting with this prefix (a trailing * is ignored)
        prefix: Option<String>,
    },

    /// Remove services
    Rm {
        /// Service names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Copy the password for a service to the clipboard
    Cp {
        /// Service name
        name: String,
    },

    /// Change the encryption password
    Repass,

    /// Print a generated password without storing it
    #[command(after_help = GENERATE_HELP)]
    Gen {
        /// Generator token (e.g. lunc24, w16)
        #[arg(default_value = "")]
        token: String,
    },

    /// Interactive mode (good for adding lots of passwords)
    #[command(visible_alias = "i")]
    Shell,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

const GENERATE_HELP: &str = "\
Generator tokens:
  l   include lowercase characters
  u   include uppercase characters
  n   include numbers
  c   include special characters
  w   concatenate random dictionary words
  N   trailing digits: password length (default 24)

With no flags, lowercase + uppercase + numbers are used.
Example: -glun24 gives a 24-character password of letters and digits.";

// ---------------------------------------------------------------------------
// Command context
// ---------------------------------------------------------------------------

/// Settings plus the passphrase session shared by the commands of one
/// invocation (or one interactive shell).
pub struct Context {
    pub config_path: PathBuf,
    pub settings: Settings,
    session: Option<Session>,
}

impl Context {
    /// Resolve the config path from the CLI and load settings.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);
        let settings = Settings::load(&config_path)?;
        Ok(Self {
            config_path,
            settings,
            session: None,
        })
    }

    pub fn store(&self) -> Store {
        self.settings.store()
    }

    /// The current session, prompting for the passphrase on first use.
    pub fn session(&mut self) -> Result<&mut Session> {
        let session = match self.session.take() {
            Some(session) => session,
            None => Session::from_prompt(prompt_password)?,
        };
        Ok(self.session.insert(session))
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Load the configured store.
    ///
    /// A wrong passphrase drops the session so the next command asks
    /// again.
    pub fn open(&mut self) -> Result<(Store, ServiceDirectory)> {
        let store = self.store();
        let result = store.load(self.session()?);
        if matches!(result, Err(PassmanError::InvalidPassphrase)) {
            self.session = None;
        }
        Ok((store, result?))
    }

    pub fn save(&mut self, store: &Store, directory: &ServiceDirectory) -> Result<()> {
        store.save(self.session()?, directory)
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the passphrase, trying in order:
/// 1. `PASSMAN_PASSWORD` env var (scripts, tests)
/// 2. Interactive masked prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env(PASSWORD_ENV) {
        return Ok(pw);
    }

    non_empty(masked_prompt("Password")?)
}

/// Prompt for a new passphrase with confirmation.
///
/// `env_var` is checked first for scripted usage.
pub fn prompt_new_password(env_var: &str) -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env(env_var) {
        return Ok(pw);
    }

    let first = masked_prompt("New password")?;
    let second = masked_prompt("Repeat password")?;
    confirmed(first, second)
}

fn masked_prompt(prompt: &str) -> Result<Zeroizing<String>> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| PassmanError::CommandFailed(format!("password prompt: {e}")))
}

/// The new passphrase, if both entries agree and it is non-empty.
fn confirmed(first: Zeroizing<String>, second: Zeroizing<String>) -> Result<Zeroizing<String>> {
    if *first != *second {
        return Err(PassmanError::PasswordMismatch);
    }
    non_empty(first)
}

fn password_from_env(var: &str) -> Option<Zeroizing<String>> {
    std::env::var(var)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

fn non_empty(pw: Zeroizing<String>) -> Result<Zeroizing<String>> {
    if pw.is_empty() {
        Err(PassmanError::EmptyPassphrase)
    } else {
        Ok(pw)
    }
}

/// Read one line from piped stdin, without the line ending.
///
/// Returns `None` at end of input.
pub fn read_stdin_line() -> Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// `true` when stdin is an interactive terminal.
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}
