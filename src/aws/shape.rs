// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;

/// Unifies SDK accessors, which return `&T` for required members and `Option<&T>`
/// for optional ones.
pub trait Optional<'a> {
    /// The member type.
    type Target: ?Sized;

    /// Returns the member, if present.
    fn optional(self) -> Option<&'a Self::Target>;
}

impl<'a, T: ?Sized> Optional<'a> for &'a T {
    type Target = T;

    fn optional(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> Optional<'a> for Option<&'a T> {
    type Target = T;

    fn optional(self) -> Option<&'a T> {
        self
    }
}

/// Copies a string member.
pub fn string<'a>(member: impl Optional<'a, Target = str>) -> Option<String> {
    member.optional().map(str::to_owned)
}

/// Spells an SDK enumeration member as the service does.
pub fn enumeration<'a, E: AsRef<str> + 'a>(member: impl Optional<'a, Target = E>) -> Option<String> {
    member.optional().map(|e| e.as_ref().to_owned())
}

/// Formats a timestamp member as RFC 3339.
pub fn timestamp<'a>(member: impl Optional<'a, Target = DateTime>) -> Option<String> {
    member
        .optional()
        .and_then(|time| time.fmt(Format::DateTime).ok())
}

/// Converts a caller-supplied timestamp for the SDK.
#[cfg(feature = "chrono")]
pub fn to_date_time(time: &chrono::DateTime<chrono::Utc>) -> DateTime {
    DateTime::from_millis(time.timestamp_millis())
}
