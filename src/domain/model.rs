use serde::Serialize;
use std::fmt;

/// The closed set of container variants together with their variant-only fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerKind {
    General,
    Liquid { hazardous: bool },
    Gas { pressure: f64 },
    Refrigerated { product_type: String, temperature: f64 },
}

impl ContainerKind {
    pub fn type_code(&self) -> char {
        match self {
            ContainerKind::General => 'B',
            ContainerKind::Liquid { .. } => 'L',
            ContainerKind::Gas { .. } => 'G',
            ContainerKind::Refrigerated { .. } => 'C',
        }
    }

    /// Liquid and gas cargo report overfill attempts to a hazard notifier.
    pub fn is_hazard_aware(&self) -> bool {
        matches!(self, ContainerKind::Liquid { .. } | ContainerKind::Gas { .. })
    }
}

/// `KON-<type-code>-<sequence>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct SerialNumber {
    type_code: char,
    sequence: u64,
}

impl SerialNumber {
    pub(crate) fn new(type_code: char, sequence: u64) -> Self {
        Self {
            type_code,
            sequence,
        }
    }

    pub fn type_code(&self) -> char {
        self.type_code
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KON-{}-{}", self.type_code, self.sequence)
    }
}

impl From<SerialNumber> for String {
    fn from(serial: SerialNumber) -> Self {
        serial.to_string()
    }
}

/// One line of a ship report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerLine {
    pub serial: SerialNumber,
    pub load: f64,
}

/// Read-only snapshot of a ship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipReport {
    pub name: String,
    pub speed: f64,
    pub max_containers: usize,
    pub max_weight: f64,
    pub total_weight: f64,
    pub containers: Vec<ContainerLine>,
}

impl fmt::Display for ShipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ship: {} | Speed: {} | Max containers: {} | Max weight: {}",
            self.name, self.speed, self.max_containers, self.max_weight
        )?;
        for line in &self.containers {
            writeln!(f, "- {} (load: {})", line.serial, line.load)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_display() {
        let serial = SerialNumber::new('L', 42);
        assert_eq!(serial.to_string(), "KON-L-42");
        assert_eq!(serial.type_code(), 'L');
        assert_eq!(serial.sequence(), 42);
        assert_eq!(serde_json::to_value(&serial).unwrap(), "KON-L-42");
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(ContainerKind::General.type_code(), 'B');
        assert_eq!(ContainerKind::Liquid { hazardous: true }.type_code(), 'L');
        assert_eq!(ContainerKind::Gas { pressure: 10.0 }.type_code(), 'G');
        let reefer = ContainerKind::Refrigerated {
            product_type: "bananas".to_string(),
            temperature: -5.0,
        };
        assert_eq!(reefer.type_code(), 'C');
        assert!(!reefer.is_hazard_aware());
    }

    #[test]
    fn test_report_display() {
        let report = ShipReport {
            name: "Statek1".to_string(),
            speed: 25.0,
            max_containers: 5,
            max_weight: 50000.0,
            total_weight: 7000.0,
            containers: vec![ContainerLine {
                serial: SerialNumber::new('L', 1),
                load: 4000.0,
            }],
        };

        let text = report.to_string();
        assert!(text.starts_with("Ship: Statek1 | Speed: 25 | Max containers: 5 | Max weight: 50000"));
        assert!(text.contains("- KON-L-1 (load: 4000)"));
    }
}
