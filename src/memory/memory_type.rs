// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification used for capacity accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemoryType {
    Flash,
    Ram,
    Rom,
    Debug,
    Unknown,
}

impl MemoryType {
    pub const ALL: [MemoryType; 5] = [
        MemoryType::Flash,
        MemoryType::Ram,
        MemoryType::Rom,
        MemoryType::Debug,
        MemoryType::Unknown,
    ];

    /// Maps a region attribute string to a memory type. Only the exact
    /// spellings `xr`, `rw`, `xrw` and `r` are recognised, case-insensitively.
    pub fn from_attributes(attributes: &str) -> Self {
        match attributes.to_ascii_lowercase().as_str() {
            "xr" => Self::Flash,
            "rw" | "xrw" => Self::Ram,
            "r" => Self::Rom,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flash => "FLASH",
            Self::Ram => "RAM",
            Self::Rom => "ROM",
            Self::Debug => "DEBUG",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MemoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown memory type: {}", s))
    }
}
