use crate::reports;
use clap::Args;
use passforge::error::{PassForgeError, PfResult};
use passforge::geometry::KeyboardLayout;
use passforge::scorer::DistanceTable;

#[derive(Args, Debug, Clone)]
pub struct DistancesArgs {
    /// Only show these keys, e.g. "asdf"
    #[arg(long)]
    pub keys: Option<String>,
}

pub fn run(args: DistancesArgs, layout: &KeyboardLayout) -> PfResult<()> {
    let table = DistanceTable::build(layout)?;

    let keys: Vec<char> = match &args.keys {
        Some(filter) => {
            if let Some(key) = table.first_missing_key(filter) {
                return Err(PassForgeError::Validation(format!(
                    "key '{}' is not on layout '{}'",
                    key,
                    layout.name()
                )));
            }
            filter.chars().collect()
        }
        None => layout.keys().iter().map(|k| k.key).collect(),
    };

    reports::print_layout_grid(layout);
    reports::print_distance_matrix(&table, &keys);
    Ok(())
}
