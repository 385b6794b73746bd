//! One module per subcommand, each exposing `execute`.

pub mod add;
pub mod completions;
pub mod config_cmd;
pub mod cp;
pub mod gen;
pub mod init;
pub mod ls;
pub mod repass;
pub mod rm;
pub mod shell;
pub mod show;

use crate::cli::{Commands, Context};
use crate::errors::Result;

/// Dispatch a parsed command.
pub fn run(ctx: &mut Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Init { force } => init::execute(ctx, *force),
        Commands::Config {
            file,
            dictionary,
            envelope,
        } => config_cmd::execute(ctx, file.as_deref(), dictionary.as_deref(), *envelope),
        Commands::Add {
            name,
            generate,
            password,
            meta,
        } => add::execute(
            ctx,
            name,
            generate.as_deref(),
            *password,
            meta.as_ref().map(Option::as_deref),
        ),
        Commands::Ls { prefix } => ls::execute(ctx, prefix.as_deref()),
        Commands::Show { prefix } => show::execute(ctx, prefix.as_deref()),
        Commands::Rm { names } => rm::execute(ctx, names),
        Commands::Cp { name } => cp::execute(ctx, name),
        Commands::Repass => repass::execute(ctx),
        Commands::Gen { token } => gen::execute(ctx, token),
        Commands::Shell => shell::execute(ctx),
        Commands::Completions { shell } => completions::execute(*shell),
    }
}
