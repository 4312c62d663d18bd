// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid device profile JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Device profile not found: {0}")]
    UnknownDevice(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Flash and RAM capacity of a target part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub id: String,
    pub flash_bytes: u64,
    pub ram_bytes: u64,
}

impl DeviceProfile {
    pub fn new(id: impl Into<String>, flash_bytes: u64, ram_bytes: u64) -> Self {
        Self {
            id: id.into(),
            flash_bytes,
            ram_bytes,
        }
    }

    pub fn custom(flash_bytes: u64, ram_bytes: u64) -> Self {
        Self::new("Custom", flash_bytes, ram_bytes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceProfiles {
    profiles: Vec<DeviceProfile>,
}

impl DeviceProfiles {
    pub fn new(profiles: Vec<DeviceProfile>) -> Self {
        Self { profiles }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn find(&self, id: &str) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&DeviceProfile, ConfigError> {
        self.find(id)
            .ok_or_else(|| ConfigError::UnknownDevice(id.to_string()))
    }

    pub fn profiles(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    /// Replaces a profile with the same id or appends a new one.
    pub fn upsert(&mut self, profile: DeviceProfile) {
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<DeviceProfile> {
        let index = self.profiles.iter().position(|p| p.id == id)?;
        Some(self.profiles.remove(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output_format: OutputFormat,
    pub pretty_json: bool,
    pub top_entries: usize,
    pub profiles_file: Option<PathBuf>,
    pub device: Option<String>,
    pub custom_flash_bytes: Option<u64>,
    pub custom_ram_bytes: Option<u64>,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            pretty_json: true,
            top_entries: 10,
            profiles_file: None,
            device: None,
            custom_flash_bytes: None,
            custom_ram_bytes: None,
            use_color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    pub fn with_top_entries(mut self, count: usize) -> Self {
        self.top_entries = count;
        self
    }

    pub fn with_device(mut self, profiles_file: PathBuf, device: String) -> Self {
        self.profiles_file = Some(profiles_file);
        self.device = Some(device);
        self
    }

    pub fn with_custom_capacity(mut self, flash_bytes: u64, ram_bytes: u64) -> Self {
        self.custom_flash_bytes = Some(flash_bytes);
        self.custom_ram_bytes = Some(ram_bytes);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.device.is_some() && self.profiles_file.is_none() {
            return Err(ConfigError::Invalid(
                "a device id requires a profiles file".to_string(),
            ));
        }
        if self.device.is_some()
            && (self.custom_flash_bytes.is_some() || self.custom_ram_bytes.is_some())
        {
            return Err(ConfigError::Invalid(
                "use either a device profile or custom capacities, not both".to_string(),
            ));
        }
        if self.custom_flash_bytes.is_some() != self.custom_ram_bytes.is_some() {
            return Err(ConfigError::Invalid(
                "custom capacities need both flash and RAM sizes".to_string(),
            ));
        }
        if self.top_entries == 0 {
            return Err(ConfigError::Invalid(
                "top_entries must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the capacity profile the configuration points at, if any.
    pub fn resolve_profile(&self) -> Result<Option<DeviceProfile>, ConfigError> {
        self.validate()?;

        if let (Some(flash), Some(ram)) = (self.custom_flash_bytes, self.custom_ram_bytes) {
            return Ok(Some(DeviceProfile::custom(flash, ram)));
        }

        match (&self.profiles_file, &self.device) {
            (Some(path), Some(id)) => {
                let profiles = DeviceProfiles::load(path)?;
                Ok(Some(profiles.get(id)?.clone()))
            }
            _ => Ok(None),
        }
    }
}
