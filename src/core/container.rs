use crate::core::serial::next_serial;
use crate::domain::model::{ContainerKind, SerialNumber};
use crate::domain::ports::{HazardNotifier, LogHazardNotifier};
use crate::utils::error::LoadError;
use std::fmt;
use std::sync::Arc;

const HAZARDOUS_LIQUID_RATIO: f64 = 0.5;
const SAFE_LIQUID_RATIO: f64 = 0.9;
const GAS_RESIDUAL_RATIO: f64 = 0.05;

/// A single physical container. Not `Clone`: each serial belongs to exactly one value.
pub struct Container {
    serial: SerialNumber,
    kind: ContainerKind,
    max_capacity: f64,
    height: f64,
    depth: f64,
    own_weight: f64,
    load: f64,
    notifier: Arc<dyn HazardNotifier>,
}

impl Container {
    pub fn new(kind: ContainerKind, max_capacity: f64, height: f64, depth: f64, own_weight: f64) -> Self {
        Self {
            serial: next_serial(kind.type_code()),
            kind,
            max_capacity,
            height,
            depth,
            own_weight,
            load: 0.0,
            notifier: Arc::new(LogHazardNotifier),
        }
    }

    pub fn general(max_capacity: f64, height: f64, depth: f64, own_weight: f64) -> Self {
        Self::new(ContainerKind::General, max_capacity, height, depth, own_weight)
    }

    pub fn liquid(max_capacity: f64, hazardous: bool, height: f64, depth: f64, own_weight: f64) -> Self {
        Self::new(ContainerKind::Liquid { hazardous }, max_capacity, height, depth, own_weight)
    }

    pub fn gas(max_capacity: f64, pressure: f64, height: f64, depth: f64, own_weight: f64) -> Self {
        Self::new(ContainerKind::Gas { pressure }, max_capacity, height, depth, own_weight)
    }

    pub fn refrigerated(
        max_capacity: f64,
        product_type: impl Into<String>,
        temperature: f64,
        height: f64,
        depth: f64,
        own_weight: f64,
    ) -> Self {
        let kind = ContainerKind::Refrigerated {
            product_type: product_type.into(),
            temperature,
        };
        Self::new(kind, max_capacity, height, depth, own_weight)
    }

    /// Replaces the default logging notifier. Only liquid and gas containers ever call it.
    pub fn with_notifier(mut self, notifier: Arc<dyn HazardNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn max_capacity(&self) -> f64 {
        self.max_capacity
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn own_weight(&self) -> f64 {
        self.own_weight
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    /// Cargo plus tare, the figure a ship counts against its weight limit.
    pub fn total_weight(&self) -> f64 {
        self.load + self.own_weight
    }

    pub fn effective_limit(&self) -> f64 {
        match self.kind {
            ContainerKind::Liquid { hazardous: true } => self.max_capacity * HAZARDOUS_LIQUID_RATIO,
            ContainerKind::Liquid { hazardous: false } => self.max_capacity * SAFE_LIQUID_RATIO,
            ContainerKind::General | ContainerKind::Gas { .. } | ContainerKind::Refrigerated { .. } => {
                self.max_capacity
            }
        }
    }

    /// Sets the load to `mass`. Loads replace, they do not accumulate.
    pub fn load_cargo(&mut self, mass: f64) -> Result<(), LoadError> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(LoadError::InvalidMass {
                serial: self.serial.clone(),
                mass,
            });
        }

        let limit = self.effective_limit();
        if mass > limit {
            if self.kind.is_hazard_aware() {
                let message = match self.kind {
                    ContainerKind::Gas { .. } => format!("Gas capacity exceeded! [{}]", self.serial),
                    _ => format!("Attempt to load liquid cargo over the limit! [{}]", self.serial),
                };
                self.notifier.notify_hazard(&message);
            }
            return Err(LoadError::Overfill {
                serial: self.serial.clone(),
                limit,
                requested: mass,
            });
        }

        tracing::debug!("Loaded {} with {} (limit {})", self.serial, mass, limit);
        self.load = mass;
        Ok(())
    }

    /// Empties the container. Gas keeps a residual share of its load.
    pub fn unload(&mut self) {
        self.load = match self.kind {
            ContainerKind::Gas { .. } => self.load * GAS_RESIDUAL_RATIO,
            ContainerKind::General | ContainerKind::Liquid { .. } | ContainerKind::Refrigerated { .. } => 0.0,
        };
        tracing::debug!("Unloaded {}, {} left", self.serial, self.load);
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("serial", &self.serial)
            .field("kind", &self.kind)
            .field("max_capacity", &self.max_capacity)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .field("own_weight", &self.own_weight)
            .field("load", &self.load)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl HazardNotifier for RecordingNotifier {
        fn notify_hazard(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_serial_prefix_follows_kind() {
        assert!(Container::liquid(100.0, false, 1.0, 1.0, 1.0).serial().to_string().starts_with("KON-L-"));
        assert!(Container::gas(100.0, 2.0, 1.0, 1.0, 1.0).serial().to_string().starts_with("KON-G-"));
        assert!(Container::refrigerated(100.0, "fish", -18.0, 1.0, 1.0, 1.0)
            .serial()
            .to_string()
            .starts_with("KON-C-"));
        assert!(Container::general(100.0, 1.0, 1.0, 1.0).serial().to_string().starts_with("KON-B-"));
    }

    #[test]
    fn test_hazardous_liquid_half_capacity() {
        let mut container = Container::liquid(10000.0, true, 250.0, 300.0, 3000.0);
        assert_eq!(container.effective_limit(), 5000.0);
        assert!(container.load_cargo(5000.0).is_ok());
        assert!(container.load_cargo(5000.1).is_err());
        assert_eq!(container.load(), 5000.0);
    }

    #[test]
    fn test_safe_liquid_ninety_percent() {
        let mut container = Container::liquid(10000.0, false, 250.0, 300.0, 3000.0);
        assert!(container.load_cargo(9000.0).is_ok());
        let err = container.load_cargo(9500.0).unwrap_err();
        assert!(matches!(err, LoadError::Overfill { limit, .. } if limit == 9000.0));
        assert_eq!(container.load(), 9000.0);
    }

    #[test]
    fn test_load_overwrites_previous_load() {
        let mut container = Container::general(1000.0, 1.0, 1.0, 100.0);
        container.load_cargo(600.0).unwrap();
        container.load_cargo(300.0).unwrap();
        assert_eq!(container.load(), 300.0);
        assert_eq!(container.total_weight(), 400.0);
    }

    #[test]
    fn test_overfill_message_names_serial_and_limit() {
        let mut container = Container::refrigerated(12000.0, "bananas", -5.0, 260.0, 310.0, 4000.0);
        let err = container.load_cargo(12001.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&container.serial().to_string()));
        assert!(message.contains("12000"));
        assert_eq!(err.serial(), container.serial());
        assert_eq!(container.load(), 0.0);
    }

    #[test]
    fn test_invalid_mass_leaves_load_unchanged() {
        let mut container = Container::general(1000.0, 1.0, 1.0, 100.0);
        container.load_cargo(500.0).unwrap();
        assert!(matches!(container.load_cargo(-1.0), Err(LoadError::InvalidMass { .. })));
        assert!(matches!(container.load_cargo(f64::NAN), Err(LoadError::InvalidMass { .. })));
        assert_eq!(container.load(), 500.0);
    }

    #[test]
    fn test_gas_unload_keeps_residual() {
        let mut container = Container::gas(8000.0, 10.0, 240.0, 290.0, 2500.0);
        container.load_cargo(7000.0).unwrap();
        container.unload();
        assert!((container.load() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_gas_unload_empties() {
        let mut reefer = Container::refrigerated(12000.0, "bananas", -5.0, 260.0, 310.0, 4000.0);
        reefer.load_cargo(11000.0).unwrap();
        reefer.unload();
        assert_eq!(reefer.load(), 0.0);

        let mut liquid = Container::liquid(10000.0, true, 250.0, 300.0, 3000.0);
        liquid.load_cargo(4000.0).unwrap();
        liquid.unload();
        assert_eq!(liquid.load(), 0.0);

        let mut general = Container::general(1000.0, 1.0, 1.0, 100.0);
        general.load_cargo(750.0).unwrap();
        general.unload();
        assert_eq!(general.load(), 0.0);
        assert_eq!(general.total_weight(), 100.0);
    }

    #[test]
    fn test_hazard_notified_only_on_failure() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut liquid = Container::liquid(1000.0, true, 1.0, 1.0, 1.0).with_notifier(notifier.clone());
        let mut gas = Container::gas(1000.0, 5.0, 1.0, 1.0, 1.0).with_notifier(notifier.clone());

        liquid.load_cargo(400.0).unwrap();
        gas.load_cargo(1000.0).unwrap();
        assert!(notifier.messages.lock().unwrap().is_empty());

        assert!(liquid.load_cargo(600.0).is_err());
        assert!(gas.load_cargo(1001.0).is_err());

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains(&liquid.serial().to_string()));
        assert!(messages[1].contains(&gas.serial().to_string()));
    }

    #[test]
    fn test_refrigerated_never_notifies() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut reefer =
            Container::refrigerated(100.0, "fish", -18.0, 1.0, 1.0, 1.0).with_notifier(notifier.clone());
        assert!(reefer.load_cargo(101.0).is_err());
        assert!(notifier.messages.lock().unwrap().is_empty());
    }
}
