// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! This crate invokes AWS service operations through one contract: a flat map of
//! parameters in, a projected response out, with list operations walked page by page.

#[cfg(any(
    feature = "appfabric",
    feature = "commerce_analytics",
    feature = "workdocs"
))]
/// Operations of AppFabric, Marketplace Commerce Analytics and WorkDocs.
pub mod aws;

/// Types common to every operation.
pub mod common;
pub use common::*;

/// Thread-safe logging.
pub mod log;
pub use log::*;

/// Parameters, projection and pagination.
pub mod select;
pub use select::*;

/// Macros used with `serde` serialization and serialization.
pub mod serde_utils;
