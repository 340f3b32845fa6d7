pub mod analyze;
pub mod plot;

use anyhow::Result;
use coalesce::{Analysis, ModelConfig, PartyTable};
use tracing::info;

use crate::cli::ModelArgs;

/// Load parties and config, apply flag overrides, and run the pipeline.
pub fn load(args: &ModelArgs) -> Result<Analysis> {
    let mut config = match &args.config {
        Some(path) => ModelConfig::read(path)?,
        None => ModelConfig::default(),
    };
    if let Some(step) = args.step { config.step = step }
    if let Some(majority) = args.majority { config.majority = Some(majority) }

    info!(path = %args.parties.display(), "loading party table");
    let table = PartyTable::read_csv(&args.parties)?;

    Ok(Analysis::run(table, &config)?)
}
