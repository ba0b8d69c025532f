use std::path::PathBuf;

use chrono::TimeDelta;
use clap::Parser;

use crate::{
    cli::settings::SettingsArgs,
    core::host::Host,
    prelude::*,
    scenario::Scenario,
    tables::build_steps_table,
};

#[derive(Parser)]
pub struct SimulateArgs {
    /// Scenario TOML file.
    pub scenario: PathBuf,

    /// Simulation time step.
    #[clap(long, env = "SIMULATION_STEP", default_value = "1h")]
    step: humantime::Duration,

    /// Also print the final pole report as JSON.
    #[clap(long)]
    pub report: bool,

    #[clap(flatten)]
    pub settings: SettingsArgs,
}

impl SimulateArgs {
    fn step(&self) -> Result<TimeDelta> {
        TimeDelta::from_std(self.step.into())
            .with_context(|| format!("step `{}` is out of range", self.step))
    }
}

#[instrument(skip_all)]
pub fn simulate(args: &SimulateArgs) -> Result {
    let scenario = Scenario::read_from(&args.scenario)?;
    let pole = scenario.build_pole(&args.settings.settings())?;
    let mut host = Host::new(pole, scenario.mounts());
    let records = host.run(scenario.start, scenario.end, args.step()?)?;
    println!("{}", build_steps_table(&records));
    if args.report {
        println!("{}", serde_json::to_string_pretty(&host.pole().report())?);
    }
    Ok(())
}
