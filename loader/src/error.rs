//! Things that can go wrong while loading a scene.

use std::fmt;

#[derive(Debug)]
pub enum LoadError {
    /// The file isn't valid JSON5, or doesn't have the right shape
    Parse(json5::Error),
    /// A body asked for a prefab that doesn't exist
    UnknownPrefab(String),
    /// The file parsed fine but the numbers make no sense
    Invalid(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Parse(e) => write!(f, "couldn't parse scene: {}", e),
            LoadError::UnknownPrefab(name) => write!(f, "no prefab body named {}", name),
            LoadError::Invalid(why) => write!(f, "invalid scene: {}", why),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<json5::Error> for LoadError {
    fn from(e: json5::Error) -> Self {
        LoadError::Parse(e)
    }
}
