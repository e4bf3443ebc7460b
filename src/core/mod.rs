pub mod container;
pub mod serial;
pub mod ship;

pub use crate::domain::model::{ContainerKind, SerialNumber, ShipReport};
pub use crate::domain::ports::{HazardNotifier, LogHazardNotifier};
pub use crate::utils::error::{LoadError, Result};
pub use container::Container;
pub use ship::{RejectReason, Rejected, Ship};
