use crate::reports;
use clap::{ArgMatches, Args};
use passforge::api;
use passforge::config::Config;
use passforge::dictionary::Dictionary;
use passforge::error::PfResult;
use passforge::geometry::KeyboardLayout;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Word list, one word per line
    #[arg(short, long, default_value = "./words")]
    pub dict: PathBuf,

    /// JSON search profile; flags typed on the command line take precedence
    #[arg(long = "config")]
    pub profile: Option<PathBuf>,

    /// Print the report as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, layout: &KeyboardLayout, matches: Option<&ArgMatches>) -> PfResult<()> {
    let config = match &args.profile {
        Some(path) => {
            info!("⚖️  Loading search profile: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            if let Some(m) = matches {
                file_config.merge_from_cli(&args.config, m);
            }
            file_config
        }
        None => args.config.clone(),
    };
    config.validate()?;

    let dictionary = Dictionary::load_from_file(&args.dict, &config.dictionary)?;
    info!("Loaded {} words", dictionary.len());
    if dictionary.is_empty() {
        warn!(
            "No words of {}..={} letters in {}",
            config.dictionary.min_word_len,
            config.dictionary.max_word_len,
            args.dict.display()
        );
    }

    let report = api::generate(layout, &dictionary, &config.search)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_generate_report(&report);
    }
    Ok(())
}
