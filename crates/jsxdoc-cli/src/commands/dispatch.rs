use jsxdoc_ide::ResolveContext;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    context: &ResolveContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Complete(args) => commands::complete::handle(&args, context, flags),
        Commands::Hover(args) => commands::hover::handle(&args, context, flags).await,
        Commands::Locate(args) => commands::locate::handle(&args, context, flags),
        Commands::Check => commands::check::handle(context, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
