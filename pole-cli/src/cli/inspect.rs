use std::path::PathBuf;

use clap::Parser;

use crate::{cli::settings::SettingsArgs, prelude::*, scenario::Scenario};

#[derive(Parser)]
pub struct InspectArgs {
    /// Scenario TOML file.
    pub scenario: PathBuf,

    #[clap(flatten)]
    pub settings: SettingsArgs,
}

#[instrument(skip_all)]
pub fn inspect(args: &InspectArgs) -> Result {
    let scenario = Scenario::read_from(&args.scenario)?;
    let pole = scenario.build_pole(&args.settings.settings())?;
    println!("{}", serde_json::to_string_pretty(&pole.report())?);
    Ok(())
}
