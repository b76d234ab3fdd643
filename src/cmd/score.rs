use crate::reports;
use clap::Args;
use passforge::api;
use passforge::error::PfResult;
use passforge::geometry::KeyboardLayout;
use passforge::scorer::DistanceTable;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Words in typing order
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    #[arg(long, default_value_t = 'g')]
    pub initial_char: char,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, layout: &KeyboardLayout) -> PfResult<()> {
    let table = DistanceTable::build(layout)?;
    let words: Vec<String> = args.words.iter().map(|w| w.to_ascii_lowercase()).collect();
    let score = api::score_phrase(&table, args.initial_char, &words)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        reports::print_phrase_score(&score);
    }
    Ok(())
}
