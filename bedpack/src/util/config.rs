use serde::{Deserialize, Serialize};

/// Configuration of a [`Bed`](crate::entities::Bed)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BedConfig {
    /// Minimum clearance between two boxes placed by the spiral heuristic
    #[serde(default = "BedConfig::default_margin")]
    pub margin: f64,
}

impl BedConfig {
    pub const DEFAULT_MARGIN: f64 = 1.0;

    fn default_margin() -> f64 {
        Self::DEFAULT_MARGIN
    }
}

impl Default for BedConfig {
    fn default() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
        }
    }
}
