use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;
use legend_snap::Palette;

/// Legend configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone)]
pub struct LegendConfig {
    /// Legend entries, in priority order (earlier entries win distance ties)
    pub legend: Vec<LegendEntry>,
}

/// One legend entry: an allowed output color and its label
#[derive(Debug, Deserialize, Clone)]
pub struct LegendEntry {
    /// Hex RGB color, e.g. "#00FF00"
    pub color: String,

    /// Human-readable terrain/object name
    pub label: String,
}

/// Built-in legend for the standard game-map tile set
const DEFAULT_LEGEND: &[(&str, &str)] = &[
    ("#00FF00", "grass"),
    ("#0000FF", "water"),
    ("#453503", "mud"),
    ("#000000", "road"),
    ("#808080", "building"),
    ("#006400", "tree"),
    ("#FF0000", "player_spawn"),
    ("#FFFF00", "npc_spawn"),
    ("#FF00FF", "car_spawn"),
    ("#FFA500", "shop"),
    ("#C0C0C0", "school"),
    ("#964B00", "fence"),
    ("#00FFFF", "teleport"),
];

impl LegendConfig {
    /// Load a legend from a YAML file, or the built-in default when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| {
                    AppError::LegendRead {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                let config: Self =
                    serde_yaml::from_str(&content).map_err(|source| AppError::LegendParse {
                        path: path.to_path_buf(),
                        source,
                    })?;
                tracing::info!(
                    path = %path.display(),
                    entries = config.legend.len(),
                    "Loaded legend"
                );
                Ok(config)
            }
            None => {
                tracing::debug!(entries = DEFAULT_LEGEND.len(), "Using built-in legend");
                Ok(Self::default())
            }
        }
    }

    /// Build the validated palette from this legend.
    pub fn to_palette(&self) -> Result<Palette, AppError> {
        let entries: Vec<(&str, &str)> = self
            .legend
            .iter()
            .map(|e| (e.color.as_str(), e.label.as_str()))
            .collect();
        Ok(Palette::from_hex(&entries)?)
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            legend: DEFAULT_LEGEND
                .iter()
                .map(|&(color, label)| LegendEntry {
                    color: color.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}
