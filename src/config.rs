use crate::errors::{ConfigError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What happens to HP when an attack takes it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HpFloor {
    /// HP keeps going negative. Fainting is left to the battle flow.
    #[default]
    Unbounded,
    /// HP stops at zero.
    Zero,
}

impl HpFloor {
    pub fn apply(&self, hp: i32) -> i32 {
        match self {
            HpFloor::Unbounded => hp,
            HpFloor::Zero => hp.max(0),
        }
    }
}

/// Engine settings, read from RON:
///
/// ```ron
/// (hp_floor: Zero)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub hp_floor: HpFloor,
}

impl EngineConfig {
    pub fn from_ron_str(text: &str) -> EngineResult<Self> {
        let config = ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from a RON file on disk
    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_ron_str(&text)?;
        log::debug!("Loaded engine config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
