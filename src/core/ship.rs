use crate::core::container::Container;
use crate::domain::model::{ContainerLine, SerialNumber, ShipReport};
use serde::Serialize;
use std::fmt;

/// Why a ship turned a container away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    TooManyContainers,
    Overweight,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooManyContainers => write!(f, "too many containers"),
            RejectReason::Overweight => write!(f, "ship overloaded"),
        }
    }
}

/// A container the ship refused, handed back to the caller untouched.
#[derive(Debug)]
pub struct Rejected {
    pub reason: RejectReason,
    pub container: Container,
}

impl Rejected {
    pub fn into_container(self) -> Container {
        self.container
    }
}

#[derive(Debug)]
pub struct Ship {
    name: String,
    max_containers: usize,
    max_weight: f64,
    speed: f64,
    containers: Vec<Container>,
}

impl Ship {
    pub fn new(name: impl Into<String>, max_containers: usize, max_weight: f64, speed: f64) -> Self {
        Self {
            name: name.into(),
            max_containers,
            max_weight,
            speed,
            containers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_containers(&self) -> usize {
        self.max_containers
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Sum of load and tare over everything aboard, recomputed on every call.
    pub fn total_weight(&self) -> f64 {
        self.containers.iter().map(Container::total_weight).sum()
    }

    pub fn container(&self, serial: &SerialNumber) -> Option<&Container> {
        self.containers.iter().find(|c| c.serial() == serial)
    }

    /// Cargo aboard can still be loaded and unloaded. Weight limits are checked on admission only.
    pub fn container_mut(&mut self, serial: &SerialNumber) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.serial() == serial)
    }

    fn position(&self, serial: &SerialNumber) -> Option<usize> {
        self.containers.iter().position(|c| c.serial() == serial)
    }

    /// `count` and `weight` describe the ship as it would be after the change.
    fn check_limits(&self, count: usize, weight: f64) -> Result<(), RejectReason> {
        if count > self.max_containers {
            return Err(RejectReason::TooManyContainers);
        }
        if weight > self.max_weight {
            return Err(RejectReason::Overweight);
        }
        Ok(())
    }

    /// Checks both fleet limits without touching the ship.
    pub fn can_accept(&self, candidate: &Container) -> Result<(), RejectReason> {
        self.check_limits(
            self.containers.len() + 1,
            self.total_weight() + candidate.total_weight(),
        )
    }

    /// Boards `container` if both limits still hold afterwards. A rejection is logged and the
    /// container comes back in [`Rejected`]; the ship is unchanged.
    pub fn add_container(&mut self, container: Container) -> Result<(), Rejected> {
        if let Err(reason) = self.can_accept(&container) {
            tracing::warn!("{}: rejected {} ({})", self.name, container.serial(), reason);
            return Err(Rejected { reason, container });
        }

        tracing::debug!("{}: boarded {}", self.name, container.serial());
        self.containers.push(container);
        Ok(())
    }

    /// Takes the container with `serial` off the ship. Absent serials are a no-op.
    pub fn remove_container(&mut self, serial: &SerialNumber) -> Option<Container> {
        let index = self.position(serial)?;
        let removed = self.containers.remove(index);
        tracing::debug!("{}: removed {}", self.name, serial);
        Some(removed)
    }

    /// Swaps the container with `serial` for `replacement` in the same slot. The limits are checked
    /// against the ship as it would look after the swap; on rejection nothing changes. Without a
    /// match this behaves like [`Ship::add_container`].
    pub fn replace_container(
        &mut self,
        serial: &SerialNumber,
        replacement: Container,
    ) -> Result<Option<Container>, Rejected> {
        let Some(index) = self.position(serial) else {
            return self.add_container(replacement).map(|()| None);
        };

        // Summed in slot order so the figure matches `total_weight` after the swap.
        let weight: f64 = self
            .containers
            .iter()
            .enumerate()
            .map(|(i, c)| if i == index { replacement.total_weight() } else { c.total_weight() })
            .sum();
        if let Err(reason) = self.check_limits(self.containers.len(), weight) {
            tracing::warn!(
                "{}: cannot replace {} with {} ({})",
                self.name,
                serial,
                replacement.serial(),
                reason
            );
            return Err(Rejected {
                reason,
                container: replacement,
            });
        }

        tracing::debug!("{}: replaced {} with {}", self.name, serial, replacement.serial());
        Ok(Some(std::mem::replace(&mut self.containers[index], replacement)))
    }

    /// Transfers the container with `serial` to `target`. Either it ends up on `target`, or it stays
    /// here in its original position. Returns whether the move happened.
    pub fn move_container_to(&mut self, serial: &SerialNumber, target: &mut Ship) -> bool {
        let Some(index) = self.position(serial) else {
            return false;
        };

        let container = self.containers.remove(index);
        match target.add_container(container) {
            Ok(()) => {
                tracing::info!("Moved {} from {} to {}", serial, self.name, target.name);
                true
            }
            Err(rejected) => {
                self.containers.insert(index, rejected.into_container());
                false
            }
        }
    }

    pub fn report(&self) -> ShipReport {
        ShipReport {
            name: self.name.clone(),
            speed: self.speed,
            max_containers: self.max_containers,
            max_weight: self.max_weight,
            total_weight: self.total_weight(),
            containers: self
                .containers
                .iter()
                .map(|c| ContainerLine {
                    serial: c.serial().clone(),
                    load: c.load(),
                })
                .collect(),
        }
    }
}
