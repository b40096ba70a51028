// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{Error, SelectConfig};
use aws_config::profile::ProfileFileRegionProvider;
use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};

/// Caller identity and target region, resolved once and handed to every remote call.
#[derive(Clone, Debug)]
pub struct ClientContext {
    sdk_config: SdkConfig,
}

impl ClientContext {
    /// Wraps an already resolved SDK configuration.
    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    /// Resolves credentials and region using the `[aws]` table of `select_config`.
    pub async fn load(select_config: &SelectConfig) -> Result<Self, Error> {
        let config_loader = create_aws_config_loader(select_config)?;
        Ok(Self::from_sdk_config(config_loader.load().await))
    }

    /// Returns the target region, if one was resolved.
    pub fn region(&self) -> Option<&Region> {
        self.sdk_config.region()
    }

    /// Returns the region name, or `"unknown"`.
    pub fn region_name(&self) -> &str {
        self.region().map(|r| r.as_ref()).unwrap_or("unknown")
    }

    /// Returns the SDK configuration used to construct service clients.
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }
}

/// Create an AWS config loader with profile and region.
pub fn create_aws_config_loader(select_config: &SelectConfig) -> Result<ConfigLoader, Error> {
    let aws = select_config.aws()?;
    let mut config_loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile_name) = aws.profile {
        if select_config.debug() {
            println!("AWS using profile name {profile_name}");
        }
        let region = ProfileFileRegionProvider::builder()
            .profile_name(&profile_name)
            .build();
        config_loader = config_loader.profile_name(&profile_name).region(region);
    }
    if let Some(region) = aws.region {
        if select_config.debug() {
            println!("AWS using region {region}");
        }
        config_loader = config_loader.region(Region::new(region));
    }
    Ok(config_loader)
}
