// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Cooperative cancellation.
mod cancel;
/// Invocation builder and the single-call invoker.
mod invoker;
/// Continuation markers.
mod marker;
/// Traits implemented by every wrapped operation.
mod operation;
/// Marker-driven page walks.
mod paginator;
/// Caller-supplied parameters and request building.
mod parameters;
/// Projection expressions.
mod projection;
/// Unit tests.
mod tests;

pub use self::cancel::CancelToken;
pub use self::invoker::{invoke, translate_fault, Invocation};
pub use self::marker::Marker;
pub use self::operation::{Operation, PagedOperation};
pub use self::paginator::Page;
pub use self::parameters::{ParamSpec, Parameters};
pub use self::projection::{to_value, Accessor, Selected, Selector, ECHO, IDENTITY};
