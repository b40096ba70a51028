// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
use serde::Deserialize;
#[allow(deprecated)]
use std::env::home_dir;
use std::fs::read_to_string;

/// The `[aws]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct AwsSettings {
    /// Named profile in the shared AWS config files.
    pub profile: Option<String>,
    /// Region that overrides the one found in the profile.
    pub region: Option<String>,
}

/// The `[select]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct SelectSettings {
    /// Upper bound on pages fetched by one auto-iterating invocation.
    pub max_pages: Option<usize>,
}

#[derive(Default, Deserialize)]
struct SettingsToml {
    #[serde(default)]
    aws: AwsSettings,
    #[serde(default)]
    select: SelectSettings,
}

/// Configuration parameters for AWS access and invocation behavior.
#[derive(Debug)]
pub struct SelectConfig {
    debug_enabled: bool,
    toml: String,
}

impl SelectConfig {
    /// Creates a configuration builder.
    pub fn builder() -> SelectConfigBuilder {
        SelectConfigBuilder {
            select_config: None,
            debug_enabled: false,
            error: None,
        }
    }

    /// Returns the `[aws]` settings, or defaults if the table is absent.
    pub fn aws(&self) -> Result<AwsSettings, Error> {
        self.settings().map(|s| s.aws)
    }

    /// Returns `true` if debug is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::Config(format!("toml: {e}")))
    }

    /// Returns the `[select]` settings, or defaults if the table is absent.
    pub fn select(&self) -> Result<SelectSettings, Error> {
        self.settings().map(|s| s.select)
    }

    fn settings(&self) -> Result<SettingsToml, Error> {
        self.get()
    }
}

/// Builds a `SelectConfig` from a TOML file or string.
pub struct SelectConfigBuilder {
    select_config: Option<SelectConfig>,
    debug_enabled: bool,
    error: Option<Error>,
}

impl SelectConfigBuilder {
    /// Returns the configuration, or the first error encountered while building it.
    pub fn build(self) -> Result<SelectConfig, Error> {
        if let Some(error) = self.error {
            Err(error)
        } else if let Some(select_config) = self.select_config {
            Ok(select_config)
        } else {
            Err(Error::Config("config not set".to_string()))
        }
    }

    /// Echo invocation logs to stdout.
    pub fn debug(self, debug_enabled: bool) -> Self {
        Self {
            select_config: self.select_config.map(|c| SelectConfig {
                debug_enabled,
                toml: c.toml,
            }),
            debug_enabled,
            error: self.error,
        }
    }

    /// Reads `file_name` from the home directory, falling back to the current directory.
    pub fn toml_file(self, file_name: &str) -> Self {
        let debug_enabled = self.debug_enabled;
        #[allow(deprecated)]
        let home_path = home_dir()
            .and_then(|pathbuf| pathbuf.to_str().map(|path| format!("{path}/{file_name}")));
        let local_path = format!("./{file_name}");
        let toml = home_path
            .and_then(|path| read_to_string(path).ok())
            .map(Ok)
            .unwrap_or_else(|| {
                read_to_string(&local_path)
                    .map_err(|_| Error::Config(format!("{local_path}: cannot read")))
            });
        match toml {
            Ok(toml) => Self {
                select_config: Some(SelectConfig {
                    debug_enabled,
                    toml,
                }),
                debug_enabled,
                error: None,
            },
            Err(e) => Self {
                select_config: None,
                debug_enabled,
                error: Some(e),
            },
        }
    }

    /// Uses `toml` as the configuration text.
    pub fn toml_str(self, toml: &str) -> Self {
        self.toml_string(toml.to_string())
    }

    /// Uses `toml` as the configuration text.
    pub fn toml_string(self, toml: String) -> Self {
        Self {
            select_config: Some(SelectConfig {
                debug_enabled: self.debug_enabled,
                toml,
            }),
            debug_enabled: self.debug_enabled,
            error: None,
        }
    }
}
