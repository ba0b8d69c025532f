pub mod accumulators;
pub mod configuration;
pub mod host;
pub mod mount;
pub mod object;
pub mod phase;
pub mod pole;
pub mod settings;
pub mod status;
pub mod weather;
