// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Macros for string wrapper tuples.
mod tuples;

#[allow(unused)]
pub use self::tuples::*;
