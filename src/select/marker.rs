// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Opaque continuation cursor returned by a list operation.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker(pub String);
crate::impl_wrapper_str!(Marker);

impl Marker {
    /// Maps an absent or empty marker to `None`.
    pub fn normalize<S: Into<String>>(marker: Option<S>) -> Option<Self> {
        marker.map(Into::into).filter(|s| !s.is_empty()).map(Self)
    }
}

impl From<&str> for Marker {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}
