use crate::commands::{
    run_positions_list, run_positions_options, run_validate_email, run_validate_phone,
    PositionsListArgs, PositionsOptionsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_kit::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Recruiting Landing Page Core",
    about = "Validate applicant contact data and query job postings from the command line",
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
    /// Check a phone number or email address the way the application form does
    Validate {
        #[command(subcommand)]
        command: ValidateCommand,
    },
    /// Filter a positions catalog or list its dropdown options
    Positions {
        #[command(subcommand)]
        command: PositionsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ValidateCommand {
    /// Classify a German phone number (only mobile numbers are accepted)
    Phone { input: String },
    /// Validate an email address and report warnings
    Email { input: String },
}

#[derive(Subcommand, Debug)]
enum PositionsCommand {
    /// Print the filtered, newest-first positions list
    List(PositionsListArgs),
    /// Print the area, capacity and region dropdown options
    Options(PositionsOptionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Positions catalog (.json or .csv), overrides APP_POSITIONS_PATH
    #[arg(long)]
    pub(crate) positions: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate {
            command: ValidateCommand::Phone { input },
        } => run_validate_phone(&input),
        Command::Validate {
            command: ValidateCommand::Email { input },
        } => run_validate_email(&input),
        Command::Positions {
            command: PositionsCommand::List(args),
        } => run_positions_list(args),
        Command::Positions {
            command: PositionsCommand::Options(args),
        } => run_positions_options(args),
    }
}
