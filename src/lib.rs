pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{FleetOutcome, FleetRunner};
pub use config::Scenario;
pub use core::{Container, ContainerKind, HazardNotifier, RejectReason, Rejected, SerialNumber, Ship, ShipReport};
pub use utils::error::{FleetError, LoadError, Result};
