#[macro_use]
mod macros;

pub mod angle;
pub mod density;
pub mod force;
pub mod length;
pub mod moment;
pub mod pressure;
pub mod rate;
pub mod speed;
pub mod time;
