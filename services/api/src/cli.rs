use crate::commands::{run_export, run_template, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_form::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Employment Application Form",
    about = "Serve the employment application form or export filled-in records as Word documents",
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
    /// Export an applicant record (JSON) to a .docx file
    Export(ExportArgs),
    /// Print a blank applicant record to use as a starting point
    Template,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Export(args) => run_export(args).map(|_| ()),
        Command::Template => run_template(),
    }
}
