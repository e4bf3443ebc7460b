pub mod runner;

pub use runner::{BoardingRejection, FleetOutcome, FleetRunner, FleetSummary};
