use crate::core::Container;
use crate::domain::model::ContainerKind;
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_mass, validate_positive_mass,
    validate_positive_number, validate_required_field, validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A fleet described in TOML: the ships and the containers to load and board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub ships: Vec<ShipSpec>,
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipSpec {
    pub name: String,
    pub max_containers: usize,
    pub max_weight: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerType {
    General,
    Liquid,
    Gas,
    Refrigerated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub kind: ContainerType,
    pub max_capacity: f64,
    pub height: f64,
    pub depth: f64,
    pub own_weight: f64,
    pub hazardous: Option<bool>,
    pub pressure: Option<f64>,
    pub product_type: Option<String>,
    pub temperature: Option<f64>,
    /// Cargo mass to load before boarding.
    pub load: Option<f64>,
    /// Name of the ship to board; the container stays ashore when omitted.
    pub ship: Option<String>,
}

impl ContainerSpec {
    pub fn container_kind(&self) -> Result<ContainerKind> {
        let kind = match self.kind {
            ContainerType::General => ContainerKind::General,
            ContainerType::Liquid => ContainerKind::Liquid {
                hazardous: self.hazardous.unwrap_or(false),
            },
            ContainerType::Gas => ContainerKind::Gas {
                pressure: *validate_required_field("containers.pressure", &self.pressure)?,
            },
            ContainerType::Refrigerated => ContainerKind::Refrigerated {
                product_type: validate_required_field("containers.product_type", &self.product_type)?
                    .clone(),
                temperature: *validate_required_field("containers.temperature", &self.temperature)?,
            },
        };
        Ok(kind)
    }

    /// Builds an empty container; `load` is applied by the runner.
    pub fn build(&self) -> Result<Container> {
        Ok(Container::new(
            self.container_kind()?,
            self.max_capacity,
            self.height,
            self.depth,
            self.own_weight,
        ))
    }
}

impl Scenario {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FleetError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FleetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FleetError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// One ship, three containers: hazardous liquid, bananas in a reefer, and gas.
    pub fn demo() -> Self {
        let ship = "Statek1".to_string();
        Self {
            ships: vec![ShipSpec {
                name: ship.clone(),
                max_containers: 5,
                max_weight: 50000.0,
                speed: 25.0,
            }],
            containers: vec![
                ContainerSpec {
                    kind: ContainerType::Liquid,
                    max_capacity: 10000.0,
                    height: 250.0,
                    depth: 300.0,
                    own_weight: 3000.0,
                    hazardous: Some(true),
                    pressure: None,
                    product_type: None,
                    temperature: None,
                    load: Some(4000.0),
                    ship: Some(ship.clone()),
                },
                ContainerSpec {
                    kind: ContainerType::Refrigerated,
                    max_capacity: 12000.0,
                    height: 260.0,
                    depth: 310.0,
                    own_weight: 4000.0,
                    hazardous: None,
                    pressure: None,
                    product_type: Some("bananas".to_string()),
                    temperature: Some(-5.0),
                    load: Some(11000.0),
                    ship: Some(ship.clone()),
                },
                ContainerSpec {
                    kind: ContainerType::Gas,
                    max_capacity: 8000.0,
                    height: 240.0,
                    depth: 290.0,
                    own_weight: 2500.0,
                    hazardous: None,
                    pressure: Some(10.0),
                    product_type: None,
                    temperature: None,
                    load: Some(7000.0),
                    ship: Some(ship),
                },
            ],
        }
    }

    pub fn ship(&self, name: &str) -> Option<&ShipSpec> {
        self.ships.iter().find(|s| s.name == name)
    }
}

impl Validate for ShipSpec {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("ships.name", &self.name)?;
        validate_positive_number("ships.max_containers", self.max_containers, 1)?;
        validate_positive_mass("ships.max_weight", self.max_weight)?;
        validate_non_negative_mass("ships.speed", self.speed)?;
        Ok(())
    }
}

impl Validate for ContainerSpec {
    fn validate(&self) -> Result<()> {
        validate_positive_mass("containers.max_capacity", self.max_capacity)?;
        validate_positive_mass("containers.height", self.height)?;
        validate_positive_mass("containers.depth", self.depth)?;
        validate_non_negative_mass("containers.own_weight", self.own_weight)?;
        if let Some(load) = self.load {
            validate_non_negative_mass("containers.load", load)?;
        }
        if let Some(product_type) = &self.product_type {
            validate_non_empty_string("containers.product_type", product_type)?;
        }
        self.container_kind().map(|_| ())
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        for ship in &self.ships {
            ship.validate()?;
        }
        validate_unique_names("ships.name", self.ships.iter().map(|s| s.name.as_str()))?;

        for container in &self.containers {
            container.validate()?;
            if let Some(name) = &container.ship {
                if self.ship(name).is_none() {
                    return Err(FleetError::InvalidConfigValueError {
                        field: "containers.ship".to_string(),
                        value: name.clone(),
                        reason: "No ship with this name is declared".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
