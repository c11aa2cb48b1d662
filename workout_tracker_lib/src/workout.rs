use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{description::describe, kind::Kind, metrics, Result, TrackerError};

const ID_MODULUS: i64 = 10_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        [coords.lat, coords.lng]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Last ten digits of the epoch milliseconds of `timestamp`. Counts up
    /// from there while `taken` reports a clash.
    pub fn generate(timestamp: &DateTime<FixedOffset>, taken: impl Fn(&WorkoutId) -> bool) -> Self {
        let mut n = timestamp.timestamp_millis().rem_euclid(ID_MODULUS);
        loop {
            let id = Self(format!("{n:010}"));
            if !taken(&id) {
                return id;
            }
            n = (n + 1) % ID_MODULUS;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind discriminant plus the kind specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running { cadence: f64, pace: f64 },
    #[serde(rename_all = "camelCase")]
    Cycling { elevation_gain: f64, speed: f64 },
}

impl WorkoutDetails {
    pub fn kind(&self) -> Kind {
        match self {
            WorkoutDetails::Running { .. } => Kind::Running,
            WorkoutDetails::Cycling { .. } => Kind::Cycling,
        }
    }

    /// Pace for runs, speed for rides.
    pub fn metric(&self) -> f64 {
        match *self {
            WorkoutDetails::Running { pace, .. } => pace,
            WorkoutDetails::Cycling { speed, .. } => speed,
        }
    }

    /// Cadence for runs, elevation gain for rides.
    pub fn field_value(&self) -> f64 {
        match *self {
            WorkoutDetails::Running { cadence, .. } => cadence,
            WorkoutDetails::Cycling { elevation_gain, .. } => elevation_gain,
        }
    }
}

/// One logged session. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    id: WorkoutId,
    coords: Coords,
    /// km
    distance: f64,
    /// min
    duration: f64,
    timestamp: DateTime<FixedOffset>,
    description: String,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl WorkoutRecord {
    pub fn running(id: WorkoutId, coords: Coords, distance: f64, duration: f64, cadence: f64, timestamp: DateTime<FixedOffset>) -> Self {
        let details = WorkoutDetails::Running {
            cadence,
            pace: metrics::pace(distance, duration),
        };
        Self::build(id, coords, distance, duration, timestamp, details)
    }

    pub fn cycling(id: WorkoutId, coords: Coords, distance: f64, duration: f64, elevation_gain: f64, timestamp: DateTime<FixedOffset>) -> Self {
        let details = WorkoutDetails::Cycling {
            elevation_gain,
            speed: metrics::speed(distance, duration),
        };
        Self::build(id, coords, distance, duration, timestamp, details)
    }

    /// Builds a record of `kind`, `field_value` being its kind specific input.
    pub fn new(kind: Kind, id: WorkoutId, coords: Coords, distance: f64, duration: f64, field_value: f64, timestamp: DateTime<FixedOffset>) -> Self {
        match kind {
            Kind::Running => Self::running(id, coords, distance, duration, field_value, timestamp),
            Kind::Cycling => Self::cycling(id, coords, distance, duration, field_value, timestamp),
        }
    }

    fn build(id: WorkoutId, coords: Coords, distance: f64, duration: f64, timestamp: DateTime<FixedOffset>, details: WorkoutDetails) -> Self {
        Self {
            description: describe(details.kind(), &timestamp),
            id,
            coords,
            distance,
            duration,
            timestamp,
            details,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> Kind {
        self.details.kind()
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }
}

/// Workouts in insertion order with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutCollection {
    workouts: Vec<WorkoutRecord>,
}

impl WorkoutCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, workout: WorkoutRecord) -> Result<()> {
        if self.contains(workout.id()) {
            return Err(TrackerError::DuplicateId(workout.id().clone()));
        }
        self.workouts.push(workout);
        Ok(())
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &WorkoutId) -> Option<&WorkoutRecord> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn remove(&mut self, id: &WorkoutId) -> Option<WorkoutRecord> {
        let index = self.workouts.iter().position(|w| w.id() == id)?;
        Some(self.workouts.remove(index))
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutRecord> {
        self.workouts.iter()
    }

    pub fn as_slice(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

impl TryFrom<Vec<WorkoutRecord>> for WorkoutCollection {
    type Error = TrackerError;

    fn try_from(workouts: Vec<WorkoutRecord>) -> Result<Self> {
        let mut collection = Self::new();
        for workout in workouts {
            collection.push(workout)?;
        }
        Ok(collection)
    }
}

impl<'a> IntoIterator for &'a WorkoutCollection {
    type Item = &'a WorkoutRecord;
    type IntoIter = std::slice::Iter<'a, WorkoutRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
