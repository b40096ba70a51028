// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::parameters::{find_spec, Parameters};
use super::Operation;
use crate::common::Error;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// Reads one named field of a response.
pub type Accessor<R> = fn(&R) -> Value;

/// Projects the whole response.
pub const IDENTITY: &str = "*";

/// Prefix of a projection which echoes an input parameter.
pub const ECHO: char = '^';

/// Serializes a response field, yielding `Value::Null` if it cannot be represented.
///
/// Only maps with non-string keys and failing `Serialize` impls cannot be represented.
/// Response fields are plain strings, numbers, options, lists and structs of those, so
/// a field added with another shape must be checked by a test that projects it.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Generates the `FIELDS` table and `field` lookup of an `Operation` impl from
/// `"FieldName" => rust_field` pairs of its response type.
///
/// # Example
///
/// `select_fields!(DescribeUsersResponse { "Users" => users, "Marker" => marker });`
#[macro_export]
macro_rules! select_fields {
    ($response:ty { $($name:literal => $field:ident),+ $(,)? }) => {
        const FIELDS: &'static [&'static str] = &[$($name),+];

        fn field(name: &str) -> Option<$crate::select::Accessor<$response>> {
            let accessor: $crate::select::Accessor<$response> = match name {
                $($name => |response: &$response| $crate::select::to_value(&response.$field),)+
                _ => return None,
            };
            Some(accessor)
        }
    };
}

/// What an invocation hands back to its caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Selected<R> {
    /// The whole response.
    Response(R),
    /// One field of the response.
    Field(Value),
    /// An input parameter, echoed.
    Parameter(Value),
}

impl<R> Selected<R> {
    /// Returns the field or parameter value, or `None` for a whole response.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Selected::Response(_) => None,
            Selected::Field(v) | Selected::Parameter(v) => Some(v),
        }
    }

    /// Returns the whole response, if that is what was selected.
    pub fn into_response(self) -> Option<R> {
        match self {
            Selected::Response(r) => Some(r),
            _ => None,
        }
    }
}

impl<R: Serialize> Selected<R> {
    /// Converts the selection to JSON.
    pub fn into_value(self) -> Value {
        match self {
            Selected::Response(r) => to_value(&r),
            Selected::Field(v) | Selected::Parameter(v) => v,
        }
    }
}

/// A resolved projection expression.
pub enum Selector<R> {
    /// `*`
    Identity,
    /// A response field.
    Field {
        /// Field name.
        name: &'static str,
        /// Reads the field.
        accessor: Accessor<R>,
    },
    /// `^Name`, with the value captured when the selector was resolved.
    Parameter {
        /// Parameter name.
        name: &'static str,
        /// The bound value, or `Value::Null`.
        value: Value,
    },
}

impl<R> Clone for Selector<R> {
    fn clone(&self) -> Self {
        match self {
            Selector::Identity => Selector::Identity,
            Selector::Field { name, accessor } => Selector::Field {
                name: *name,
                accessor: *accessor,
            },
            Selector::Parameter { name, value } => Selector::Parameter {
                name: *name,
                value: value.clone(),
            },
        }
    }
}

impl<R> Debug for Selector<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Identity => f.write_str("*"),
            Selector::Field { name, .. } => f.write_str(name),
            Selector::Parameter { name, value } => write!(f, "^{name}={value}"),
        }
    }
}

impl<R> Selector<R> {
    /// Selects a field through a typed accessor, bypassing name lookup.
    pub fn accessor(name: &'static str, accessor: Accessor<R>) -> Self {
        Selector::Field { name, accessor }
    }

    /// Returns `true` for an echo of an input parameter.
    pub fn is_parameter(&self) -> bool {
        matches!(self, Selector::Parameter { .. })
    }

    /// Applies the selector. `None` stands for "no response", which only an echo can
    /// project.
    pub fn project(&self, response: Option<R>) -> Option<Selected<R>> {
        match (self, response) {
            (Selector::Parameter { value, .. }, _) => Some(Selected::Parameter(value.clone())),
            (Selector::Identity, Some(response)) => Some(Selected::Response(response)),
            (Selector::Field { accessor, .. }, Some(response)) => {
                Some(Selected::Field(accessor(&response)))
            }
            (_, None) => None,
        }
    }

    /// Resolves `expression` against the fields and parameters of `O`. Echoed values are
    /// read from `parameters` now.
    pub fn resolve<O>(expression: &str, parameters: &Parameters) -> Result<Self, Error>
    where
        O: Operation<Response = R>,
    {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(Error::argument(
                "Select",
                format!("{} projection is empty", O::NAME),
            ));
        }
        if expression == IDENTITY {
            return Ok(Selector::Identity);
        }
        if let Some(parameter) = expression.strip_prefix(ECHO) {
            let spec = find_spec(O::PARAMETERS, parameter).ok_or_else(|| {
                Error::argument(
                    expression,
                    format!("{expression} does not name a parameter of {}", O::NAME),
                )
            })?;
            return Ok(Selector::Parameter {
                name: spec.name,
                value: parameters.get(spec.name).cloned().unwrap_or(Value::Null),
            });
        }
        O::FIELDS
            .iter()
            .find(|field| field.eq_ignore_ascii_case(expression))
            .and_then(|&name| O::field(name).map(|accessor| Selector::Field { name, accessor }))
            .ok_or_else(|| {
                Error::argument(
                    expression,
                    format!(
                        "{expression} is not a field of the {} response; expected {IDENTITY}, {ECHO}Parameter or one of {}",
                        O::NAME,
                        O::FIELDS.join(", ")
                    ),
                )
            })
    }
}
