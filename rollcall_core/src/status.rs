// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Colour coding for attendance status selects.

#![expect(missing_docs, reason = "status names are self-descriptive")]

use std::fmt;
use std::str::FromStr;

use crate::ElementPatch;

pub const SELECTOR: &str = ".status-select";

/// Classes cleared whenever the selected status changes.
pub const BADGE_CLASSES: [&str; 4] = [
    "badge-present",
    "badge-late",
    "badge-absent",
    "badge-excused",
];

/// The attendance states the server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Excused,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attendance status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for AttendanceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "late" => Ok(Self::Late),
            "absent" => Ok(Self::Absent),
            "excused" => Ok(Self::Excused),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Late => "late",
            Self::Absent => "absent",
            Self::Excused => "excused",
        }
    }

    /// `(border-color, color)` for a select showing this status.
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Present => ("#28a745", "#28a745"),
            // Yellow text is unreadable on white.
            Self::Late => ("#ffc107", "#333"),
            Self::Absent => ("#dc3545", "#dc3545"),
            Self::Excused => ("#17a2b8", "#17a2b8"),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling for a status select whose current value is `value`.
///
/// Unknown values only lose their badge classes and keep whatever colours they had.
pub fn select_patch(value: &str) -> ElementPatch {
    let patch = ElementPatch::new().remove_classes(BADGE_CLASSES);
    match value.parse::<AttendanceStatus>() {
        Ok(status) => {
            let (border, text) = status.colors();
            patch.style("border-color", border).style("color", text)
        }
        Err(_) => patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_differs_from_present() {
        let present = select_patch("present");
        let absent = select_patch("absent");
        assert_eq!(present.style_value("border-color"), Some("#28a745"));
        assert_eq!(absent.style_value("border-color"), Some("#dc3545"));
        assert_eq!(absent.style_value("color"), Some("#dc3545"));
        assert_ne!(present.style_value("color"), absent.style_value("color"));
    }

    #[test]
    fn late_uses_dark_text() {
        let late = select_patch("late");
        assert_eq!(late.style_value("border-color"), Some("#ffc107"));
        assert_eq!(late.style_value("color"), Some("#333"));
    }

    #[test]
    fn unknown_values_only_clear_badges() {
        let patch = select_patch("");
        assert!(patch.styles.is_empty());
        assert_eq!(patch.classes.len(), BADGE_CLASSES.len());
    }

    #[test]
    fn round_trips_names() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Late,
            AttendanceStatus::Absent,
            AttendanceStatus::Excused,
        ] {
            assert_eq!(status.as_str().parse(), Ok(status));
        }
        assert!("tardy".parse::<AttendanceStatus>().is_err());
    }
}
