#[macro_use]
extern crate rocket;

#[macro_use]
extern crate failure;

pub mod bank;
pub mod config;
pub mod console;
pub mod logging;
pub mod report;
pub mod server;
pub mod simulation;

pub use crate::bank::counter::{Counter, CounterStats, ServiceRecord};
pub use crate::bank::customer::Customer;
pub use crate::bank::Time;
pub use crate::config::{SimulationConfig, ValidationError};
pub use crate::simulation::{simulate, simulate_with_trace, SimulationResult, SimulationTrace};
