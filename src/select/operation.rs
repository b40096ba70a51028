// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{Accessor, Marker, ParamSpec};
use crate::common::{AnyhowError, ClientContext};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// One remote operation: its parameters, its response fields, and how to call it.
#[async_trait]
pub trait Operation: Send + Sync {
    /// Built from the bound parameters, dotted names becoming nested groups.
    type Request: DeserializeOwned + Clone + Send + Sync + 'static;
    /// What the remote call returns.
    type Response: Clone + Send + Sync + 'static;

    /// Service name, for example `"WorkDocs"`.
    const SERVICE: &'static str;
    /// Operation name, for example `"DescribeUsers"`.
    const NAME: &'static str;
    /// Projection used when the caller gives none.
    const DEFAULT_SELECT: &'static str;
    /// Accepted parameters.
    const PARAMETERS: &'static [ParamSpec];
    /// Names accepted by `field`. Usually generated by `select_fields!`.
    const FIELDS: &'static [&'static str];
    /// Whether the call changes remote state, and so needs confirmation.
    const MUTATING: bool = false;
    /// Parameter echoed when the caller asks for pass-through.
    const PASS_THRU: Option<&'static str> = None;

    /// Returns the accessor of a field named exactly as in `FIELDS`.
    fn field(name: &str) -> Option<Accessor<Self::Response>>;

    /// Makes exactly one remote call.
    async fn invoke(
        &self,
        context: &ClientContext,
        request: Self::Request,
    ) -> Result<Self::Response, AnyhowError>;
}

/// A list operation which returns its results a page at a time.
pub trait PagedOperation: Operation {
    /// Name of the parameter carrying the marker, for example `"Marker"` or `"NextToken"`.
    const MARKER: &'static str;

    /// Attaches the marker of the page to fetch (`None` for the first page).
    fn set_marker(request: &mut Self::Request, marker: Option<Marker>);

    /// Reads the marker of the following page, if any.
    fn next_marker(response: &Self::Response) -> Option<Marker>;
}
