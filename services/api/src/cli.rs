use crate::commands::{run_ask, run_career, run_catalog, run_recommend, AskArgs, CareerArgs, RecommendArgs};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Score careers against an assessment profile and serve the guidance API",
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
    /// Rank the catalog for a profile and optionally write a text report
    Recommend(RecommendArgs),
    /// Show the full record for one career
    Career(CareerArgs),
    /// List every career in the catalog
    Catalog,
    /// Ask the career assistant a question
    Ask(AskArgs),
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
        Command::Recommend(args) => run_recommend(args),
        Command::Career(args) => run_career(args),
        Command::Catalog => run_catalog(),
        Command::Ask(args) => run_ask(args),
    }
}
