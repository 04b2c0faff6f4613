use serde::{Deserialize, Serialize};

/// A single sensor reading, used as a non-numeric element type in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub sensor: String,
    pub value: f64,
}

impl Reading {
    pub fn new(sensor: &str, value: f64) -> Self {
        Self {
            sensor: sensor.to_string(),
            value,
        }
    }
}

/// A small, fixed batch of readings from three sensors.
pub fn readings() -> Vec<Reading> {
    vec![
        Reading::new("boiler", 71.5),
        Reading::new("attic", 18.0),
        Reading::new("boiler", 73.0),
        Reading::new("garage", -2.5),
        Reading::new("attic", 19.5),
    ]
}
