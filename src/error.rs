use std::fmt;

/// Reasons a `GameConfig` is rejected before a game can start.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    InvalidDimension { field: &'static str, value: f32 },
    InvalidSpeed { field: &'static str, value: f32 },
    EntityTooLarge { entity: &'static str, width: f32, height: f32 },
    ZeroHealth,
    ZeroSpawnInterval,
    ZeroReload,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            }
            Self::InvalidSpeed { field, value } => {
                write!(f, "{field} must be a non-negative finite number, got {value}")
            }
            Self::EntityTooLarge {
                entity,
                width,
                height,
            } => write!(
                f,
                "{entity} does not fit inside the {width}x{height} visible area"
            ),
            Self::ZeroHealth => write!(f, "hero health must start above zero"),
            Self::ZeroSpawnInterval => write!(f, "enemy spawn interval must be non-zero"),
            Self::ZeroReload => write!(f, "enemy reload must be at least one frame"),
        }
    }
}

impl std::error::Error for ConfigError {}
