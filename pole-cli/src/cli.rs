mod inspect;
mod settings;
mod simulate;

use clap::{Parser, Subcommand};

pub use self::{
    inspect::{InspectArgs, inspect},
    simulate::{SimulateArgs, simulate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: run the scenario step by step and print the pole state after each step.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Initialize the scenario pole and print its report without stepping.
    #[clap(name = "inspect")]
    Inspect(Box<InspectArgs>),
}
