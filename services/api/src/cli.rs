use crate::report::{run_pipeline, run_quality, run_roles, QualityArgs, RolesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use staffing_backoffice::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Staffing Backoffice",
    about = "Serve the staffing backoffice API or run its checks from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the data-quality scan over an export file or the configured store
    Quality(QualityArgs),
    /// Print the role catalog and granted permissions
    Roles(RolesArgs),
    /// Print the recruitment pipeline stages
    Pipeline,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve collection exports from this directory instead of the demo data
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quality(args) => run_quality(args),
        Command::Roles(args) => run_roles(args),
        Command::Pipeline => {
            run_pipeline();
            Ok(())
        }
    }
}
