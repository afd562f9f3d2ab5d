use serde::{Deserialize, Serialize};

/// Exposure of the pool surface to wind.
///
/// Each variant reduces the 10 m reference wind speed of the climate data to
/// the effective wind speed at the water surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindShielding {
    /// Open deck without any obstructions (70 %).
    #[default]
    OpenExposure,
    /// Some walls or windbreaks (40 %).
    PartlyShielded,
    /// Recessed pool or large windbreaks (15 %).
    Recessed,
    /// Partly enclosed pool (5 %).
    HighlyShielded,
}

impl WindShielding {
    /// All shielding categories, from most to least exposed.
    pub const ALL: [WindShielding; 4] = [
        WindShielding::OpenExposure,
        WindShielding::PartlyShielded,
        WindShielding::Recessed,
        WindShielding::HighlyShielded,
    ];

    /// Ratio of surface wind speed to 10 m reference wind speed.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            WindShielding::OpenExposure => 0.70,
            WindShielding::PartlyShielded => 0.40,
            WindShielding::Recessed => 0.15,
            WindShielding::HighlyShielded => 0.05,
        }
    }

    /// Human-readable description of the exposure.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            WindShielding::OpenExposure => "Open exposure (70%), open deck without obstructions",
            WindShielding::PartlyShielded => "Partly shielded (40%), some walls or windbreaks",
            WindShielding::Recessed => "Recessed or surrounded (15%), large windbreaks",
            WindShielding::HighlyShielded => "Highly shielded (5%), partly enclosed",
        }
    }
}
