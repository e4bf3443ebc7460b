use crate::config::Scenario;
use crate::core::{Container, RejectReason, SerialNumber, Ship, ShipReport};
use crate::utils::error::{LoadError, Result};
use crate::utils::validation::Validate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BoardingRejection {
    pub serial: SerialNumber,
    pub ship: String,
    pub reason: RejectReason,
}

/// Fleet state after a scenario has been played.
#[derive(Debug, Default)]
pub struct FleetOutcome {
    pub ships: Vec<Ship>,
    /// Containers without a ship, including those a ship rejected.
    pub ashore: Vec<Container>,
    pub load_failures: Vec<LoadError>,
    pub rejections: Vec<BoardingRejection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    pub ships: Vec<ShipReport>,
    pub ashore: Vec<SerialNumber>,
    pub load_failures: Vec<String>,
    pub rejections: Vec<BoardingRejection>,
}

impl FleetOutcome {
    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name() == name)
    }

    pub fn reports(&self) -> Vec<ShipReport> {
        self.ships.iter().map(Ship::report).collect()
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            ships: self.reports(),
            ashore: self.ashore.iter().map(|c| c.serial().clone()).collect(),
            load_failures: self.load_failures.iter().map(|e| e.to_string()).collect(),
            rejections: self.rejections.clone(),
        }
    }
}

pub struct FleetRunner;

impl FleetRunner {
    /// Validates the scenario, then loads every container and boards it in declaration order.
    /// Overfills and rejections are recorded; only an invalid scenario is an error.
    pub fn run(scenario: &Scenario) -> Result<FleetOutcome> {
        scenario.validate()?;
        tracing::info!(
            "Running scenario with {} ships and {} containers",
            scenario.ships.len(),
            scenario.containers.len()
        );

        let mut outcome = FleetOutcome {
            ships: scenario
                .ships
                .iter()
                .map(|s| Ship::new(s.name.clone(), s.max_containers, s.max_weight, s.speed))
                .collect(),
            ..FleetOutcome::default()
        };

        for spec in &scenario.containers {
            let mut container = spec.build()?;

            if let Some(mass) = spec.load {
                if let Err(e) = container.load_cargo(mass) {
                    tracing::error!("Load failed: {}", e);
                    outcome.load_failures.push(e);
                }
            }

            let Some(name) = spec.ship.as_deref() else {
                outcome.ashore.push(container);
                continue;
            };
            // Validation guarantees the ship exists.
            let Some(ship) = outcome.ships.iter_mut().find(|s| s.name() == name) else {
                outcome.ashore.push(container);
                continue;
            };

            if let Err(rejected) = ship.add_container(container) {
                outcome.rejections.push(BoardingRejection {
                    serial: rejected.container.serial().clone(),
                    ship: name.to_string(),
                    reason: rejected.reason,
                });
                outcome.ashore.push(rejected.into_container());
            }
        }

        tracing::info!(
            "Scenario finished: {} load failures, {} rejections",
            outcome.load_failures.len(),
            outcome.rejections.len()
        );
        Ok(outcome)
    }
}
