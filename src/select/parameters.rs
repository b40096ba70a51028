// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::Error;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A parameter accepted by an operation. Dotted names such as
/// `Tenant.TenantIdentifier` address a member of a nested group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParamSpec {
    /// Parameter name, as spelled in the service model.
    pub name: &'static str,
    /// Whether the operation cannot be invoked without it.
    pub required: bool,
    /// Whether it carries a continuation marker, which is unbound when empty.
    pub marker: bool,
}

impl ParamSpec {
    /// A parameter that may be left unbound.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            marker: false,
        }
    }

    /// A parameter that must be bound.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            marker: false,
        }
    }

    /// The continuation marker of a list operation.
    pub const fn marker(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            marker: true,
        }
    }
}

/// Caller-supplied parameter values, keyed by name.
///
/// # Example
///
/// Parameters::new().with("OrganizationId", "d-1234").with("Limit", 50)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name` (compared case-insensitively), if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
            .filter(|v| !v.is_null())
    }

    /// Binds `value` to `name`, replacing any earlier value of the same spelling.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns `true` if `name` is bound to a non-null value.
    pub fn is_bound(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over bound names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Binds `value` to `name` and returns `self`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Matches every bound name against `specs`, respelling it as declared, and checks
    /// that every required parameter is bound. An empty marker is dropped.
    pub(crate) fn bind(&self, specs: &[ParamSpec], operation: &str) -> Result<Self, Error> {
        let mut bound = BTreeMap::new();
        for (name, value) in self.0.iter().filter(|(_, v)| !v.is_null()) {
            let spec = find_spec(specs, name).ok_or_else(|| {
                Error::argument(
                    name.as_str(),
                    format!("{operation} does not accept a parameter named {name}"),
                )
            })?;
            if spec.marker && value.as_str() == Some("") {
                continue;
            }
            if bound.insert(spec.name.to_string(), value.clone()).is_some() {
                return Err(Error::argument(
                    spec.name,
                    format!("{operation} received {} more than once", spec.name),
                ));
            }
        }
        if let Some(missing) = specs
            .iter()
            .find(|spec| spec.required && !bound.contains_key(spec.name))
        {
            return Err(Error::argument(
                missing.name,
                format!("{operation} requires a value for {}", missing.name),
            ));
        }
        Ok(Self(bound))
    }

    /// Expands dotted names into nested groups and deserializes the request.
    pub(crate) fn to_request<T: DeserializeOwned>(&self, operation: &str) -> Result<T, Error> {
        let mut root = Map::new();
        for (name, value) in self.0.iter().filter(|(_, v)| !v.is_null()) {
            insert_dotted(&mut root, name, value.clone())
                .map_err(|message| Error::argument(name.as_str(), message))?;
        }
        serde_json::from_value(Value::Object(root))
            .map_err(|e| Error::argument(operation, format!("cannot build request: {e}")))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Finds the declared spelling of `name`.
pub(crate) fn find_spec<'a>(specs: &'a [ParamSpec], name: &str) -> Option<&'a ParamSpec> {
    specs.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

fn insert_dotted(root: &mut Map<String, Value>, name: &str, value: Value) -> Result<(), String> {
    let mut segments = name.split('.').peekable();
    let mut group = root;
    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            return Err(format!("{name} has an empty group name"));
        }
        if segments.peek().is_none() {
            if group.contains_key(segment) {
                return Err(format!("{name} conflicts with a group of the same name"));
            }
            group.insert(segment.to_string(), value);
            return Ok(());
        }
        group = match group
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
        {
            Value::Object(nested) => nested,
            _ => return Err(format!("{name} is nested under {segment}, which is not a group")),
        };
    }
    Ok(())
}
