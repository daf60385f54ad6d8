/*
 * Copyright (c):
 * 2025 Gustavo Mondragón
 * gustavms93@gmail.com
 *
 * This file is part of nu-sui.
 *
 * nu-sui is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * nu-sui is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with nu-sui. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigBuilder, ConfigError};
use config::builder::DefaultState;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use gearing::{BikeType, Language, DEFAULT_CADENCE};

const APP_DIR_NAME: &str = "nu-sui";

/// Directory the settings file lives in. Falls back to the working directory
/// when the platform has no local data directory
pub fn settings_dir() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.data_local_dir().join(APP_DIR_NAME),
        None => {
            warn!("Couldn't determine local data dir. Using current dir for settings");
            PathBuf::from(".")
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    pub language: Language,
    pub technical_mode: bool,
    pub show_debug: bool,
    pub bike_type: BikeType,
    pub wheel_size: String,
    pub cadence: u32,
    /// Comma separated teeth as last entered in the manual configuration dialog
    pub custom_chainrings: String,
    pub custom_sprockets: String,
    #[serde(skip)]
    dir: PathBuf
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            language: Language::default(),
            technical_mode: false,
            show_debug: false,
            bike_type: BikeType::default(),
            wheel_size: BikeType::default().default_wheel().to_string(),
            cadence: DEFAULT_CADENCE,
            custom_chainrings: String::new(),
            custom_sprockets: String::new(),
            dir: settings_dir()
        }
    }
}

impl GlobalSettings {
    const LANGUAGE: &'static str = "language";
    const TECHNICAL_MODE: &'static str = "technical_mode";
    const SHOW_DEBUG: &'static str = "show_debug";
    const BIKE_TYPE: &'static str = "bike_type";
    const WHEEL_SIZE: &'static str = "wheel_size";
    const CADENCE: &'static str = "cadence";
    const CUSTOM_CHAINRINGS: &'static str = "custom_chainrings";
    const CUSTOM_SPROCKETS: &'static str = "custom_sprockets";
    const CONFIG_FILENAME: &'static str = "nu-sui-conf.toml";

    pub fn load() -> Result<Self, ConfigError> {
        GlobalSettings::load_from(&settings_dir())
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = GlobalSettings::default();
        Config::builder()
            .set_default(GlobalSettings::LANGUAGE, "english")?
            .set_default(GlobalSettings::TECHNICAL_MODE, defaults.technical_mode)?
            .set_default(GlobalSettings::SHOW_DEBUG, defaults.show_debug)?
            .set_default(GlobalSettings::BIKE_TYPE, defaults.bike_type.key())?
            .set_default(GlobalSettings::WHEEL_SIZE, defaults.wheel_size)?
            .set_default(GlobalSettings::CADENCE, defaults.cadence as i64)?
            .set_default(GlobalSettings::CUSTOM_CHAINRINGS, defaults.custom_chainrings)?
            .set_default(GlobalSettings::CUSTOM_SPROCKETS, defaults.custom_sprockets)
    }

    /// Load the settings stored in `dir`. A missing or unreadable file is replaced by the defaults
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(GlobalSettings::CONFIG_FILENAME);
        let loaded = GlobalSettings::with_defaults()?
            .add_source(config::File::from(path.as_path()))
            .add_source(config::Environment::with_prefix("APP"))
            .build();
        match loaded {
            Ok(settings) => {
                let mut ret: GlobalSettings = settings.try_deserialize()?;
                ret.dir = dir.to_path_buf();
                info!("Loaded settings from {}", path.display());
                Ok(ret)
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = GlobalSettings::with_defaults()?.build()?;
                let mut ret: GlobalSettings = settings.try_deserialize()?;
                ret.dir = dir.to_path_buf();
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(GlobalSettings::CONFIG_FILENAME)
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }

    /// Switch to a preset along with its default wheel
    pub fn select_bike(&mut self, bike_type: BikeType) {
        self.bike_type = bike_type;
        self.wheel_size = bike_type.default_wheel().to_string();
    }
}

#[cfg(test)]
mod tests {
    use gearing::{BikeType, Language};
    use crate::settings::GlobalSettings;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let settings = GlobalSettings::load_from(tmp_dir.path()).unwrap();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.bike_type, BikeType::Mtb);
        assert_eq!(settings.wheel_size, "26x2.1");
        assert_eq!(settings.cadence, 80);
        assert!(settings.path().is_file());
    }

    #[test]
    fn round_trip() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let mut settings = GlobalSettings::load_from(tmp_dir.path()).unwrap();
        settings.language = Language::Spanish;
        settings.technical_mode = true;
        settings.show_debug = true;
        settings.select_bike(BikeType::Road);
        settings.cadence = 95;
        settings.custom_chainrings = "34,50".to_string();
        settings.custom_sprockets = "11,12,14".to_string();
        settings.write().unwrap();

        let contents = std::fs::read_to_string(settings.path()).unwrap();
        assert!(contents.contains("language = \"spanish\""));
        assert!(contents.contains("bike_type = \"road\""));

        let loaded = GlobalSettings::load_from(tmp_dir.path()).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.wheel_size, "700x25C");
    }

    #[test]
    fn selecting_a_bike_resets_the_wheel() {
        let mut settings = GlobalSettings::default();
        settings.select_bike(BikeType::Custom);
        assert_eq!(settings.wheel_size, "700C");
        settings.wheel_size = "29x2.3".to_string();
        settings.select_bike(BikeType::Urban);
        assert_eq!(settings.wheel_size, "700x35C");
    }
}
