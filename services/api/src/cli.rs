use crate::demo::{run_demo, run_fleet_report, DemoArgs, FleetReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fleet_compliance::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fleet Compliance",
    about = "Score fleet vehicle compliance from the command line or over HTTP",
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
    /// Work with fleet roster exports
    Fleet {
        #[command(subcommand)]
        command: FleetCommand,
    },
    /// Score a built-in sample fleet to show the rubric end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FleetCommand {
    /// Score every vehicle in a roster CSV and print a fleet report
    Report(FleetReportArgs),
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
        Command::Fleet {
            command: FleetCommand::Report(args),
        } => run_fleet_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
