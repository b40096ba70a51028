// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

// Response and request members are named after the service model.
#[cfg(feature = "appfabric")]
#[allow(missing_docs)]
/// Operations of AWS AppFabric.
pub mod appfabric;
#[cfg(feature = "commerce_analytics")]
#[allow(missing_docs)]
/// Operations of AWS Marketplace Commerce Analytics.
pub mod commerce_analytics;
/// Conversions between SDK shapes and serializable values.
mod shape;
#[cfg(feature = "workdocs")]
#[allow(missing_docs)]
/// Operations of Amazon WorkDocs.
pub mod workdocs;

pub use self::shape::Optional;
