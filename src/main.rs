use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use passforge::error::PfResult;
use passforge::geometry::KeyboardLayout;
use passforge::layouts::KnownLayout;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Built-in layout to type on
    #[arg(global = true, short, long, default_value_t = KnownLayout::Qwerty)]
    layout: KnownLayout,

    /// Custom layout JSON; overrides --layout
    #[arg(global = true, long)]
    layout_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the cheapest-to-type password
    Generate(cmd::generate::GenerateArgs),
    /// Print the key-to-key move table
    Distances(cmd::distances::DistancesArgs),
    /// Price a given sequence of words
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("🚀 Initializing PassForge...");

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> PfResult<()> {
    let layout = load_layout(&cli)?;

    match cli.command {
        Commands::Generate(args) => {
            cmd::generate::run(args, &layout, matches.subcommand_matches("generate"))
        }
        Commands::Distances(args) => cmd::distances::run(args, &layout),
        Commands::Score(args) => cmd::score::run(args, &layout),
    }
}

fn load_layout(cli: &Cli) -> PfResult<KeyboardLayout> {
    match &cli.layout_file {
        Some(path) => {
            info!("📂 Loading Layout: {}", path.display());
            KeyboardLayout::load_from_file(path)
        }
        None => {
            info!("📂 Using Layout: {}", cli.layout);
            cli.layout.to_layout()
        }
    }
}
