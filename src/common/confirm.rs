// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Decides whether a mutating operation may proceed against a resource.
pub trait ConfirmPolicy: Send + Sync {
    /// Returns `true` to let `operation` act on `resource_id`.
    fn proceed(&self, operation: &str, resource_id: &str) -> bool;
}

impl<F> ConfirmPolicy for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn proceed(&self, operation: &str, resource_id: &str) -> bool {
        self(operation, resource_id)
    }
}

/// Approves everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysProceed;

impl ConfirmPolicy for AlwaysProceed {
    fn proceed(&self, _operation: &str, _resource_id: &str) -> bool {
        true
    }
}

/// Declines everything, which turns mutating invocations into dry runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRun;

impl ConfirmPolicy for DryRun {
    fn proceed(&self, _operation: &str, _resource_id: &str) -> bool {
        false
    }
}
