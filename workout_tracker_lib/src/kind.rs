use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Running,
    Cycling,
}

/// The kind specific numeric input next to distance and duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Distance,
    Duration,
    Cadence,
    ElevationGain,
}

/// Everything that differs between the workout kinds, looked up by `Kind`.
#[derive(Debug)]
pub struct KindProfile {
    pub kind: Kind,
    /// Short name for pickers.
    pub name: &'static str,
    /// Prefix of the workout description.
    pub label: &'static str,
    pub icon: &'static str,
    pub css_modifier: &'static str,
    pub metric: fn(f64, f64) -> f64,
    pub metric_icon: &'static str,
    pub metric_unit: &'static str,
    pub field: FormField,
    pub field_icon: &'static str,
    pub field_unit: &'static str,
}

static PROFILES: [KindProfile; 2] = [
    KindProfile {
        kind: Kind::Running,
        name: "Running",
        label: "Running session",
        icon: "🏃",
        css_modifier: "running",
        metric: metrics::pace,
        metric_icon: "⚡️",
        metric_unit: "min/km",
        field: FormField::Cadence,
        field_icon: "🦶🏼",
        field_unit: "spm",
    },
    KindProfile {
        kind: Kind::Cycling,
        name: "Cycling",
        label: "Cycling session",
        icon: "🚵‍♂️",
        css_modifier: "cycling",
        metric: metrics::speed,
        metric_icon: "⚡️",
        metric_unit: "km/h",
        field: FormField::ElevationGain,
        field_icon: "⛰",
        field_unit: "m",
    },
];

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Running, Kind::Cycling];

    pub fn profile(self) -> &'static KindProfile {
        match self {
            Kind::Running => &PROFILES[0],
            Kind::Cycling => &PROFILES[1],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.profile().css_modifier
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown workout kind '{s}'"))
    }
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::Distance => "distance",
            FormField::Duration => "duration",
            FormField::Cadence => "cadence",
            FormField::ElevationGain => "elevation gain",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
