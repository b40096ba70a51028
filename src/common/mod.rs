// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod config;
/// Confirmation gate for mutating operations.
mod confirm;
mod context;
/// An enum that encapsulates a variety of error types.
mod error;

pub use self::config::{AwsSettings, SelectConfig, SelectConfigBuilder, SelectSettings};
pub use self::confirm::{AlwaysProceed, ConfirmPolicy, DryRun};
pub use self::context::{create_aws_config_loader, ClientContext};
pub use self::error::{AnyhowError, Error};
