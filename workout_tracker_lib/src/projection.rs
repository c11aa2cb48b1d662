//! Views of a workout: the map marker with its popup and the sidebar entry.
//! Both are plain data, the frontend decides how to draw them.

use crate::{
    config::TrackerConfig,
    kind::Kind,
    workout::{Coords, WorkoutCollection, WorkoutId, WorkoutRecord},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerProjection {
    pub id: WorkoutId,
    pub coords: Coords,
    pub popup_class: String,
    pub content: String,
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub id: WorkoutId,
    pub kind: Kind,
    pub css_class: String,
    pub title: String,
    pub details: Vec<DetailRow>,
}

pub fn marker(workout: &WorkoutRecord, config: &TrackerConfig) -> MarkerProjection {
    let profile = workout.kind().profile();
    MarkerProjection {
        id: workout.id().clone(),
        coords: workout.coords(),
        popup_class: format!("{}-popup", profile.css_modifier),
        content: format!("{} {}", profile.icon, workout.description()),
        max_width: config.popup_max_width,
        min_width: config.popup_min_width,
        // Popups of earlier workouts stay open
        auto_close: false,
        close_on_click: false,
    }
}

pub fn sidebar_entry(workout: &WorkoutRecord) -> SidebarEntry {
    let profile = workout.kind().profile();
    let details = workout.details();

    SidebarEntry {
        id: workout.id().clone(),
        kind: workout.kind(),
        css_class: format!("workout workout--{}", profile.css_modifier),
        title: workout.description().to_owned(),
        details: vec![
            DetailRow { icon: profile.icon, value: workout.distance().to_string(), unit: "km" },
            DetailRow { icon: "⏱", value: workout.duration().to_string(), unit: "min" },
            DetailRow { icon: profile.metric_icon, value: format!("{:.2}", details.metric()), unit: profile.metric_unit },
            DetailRow { icon: profile.field_icon, value: details.field_value().to_string(), unit: profile.field_unit },
        ],
    }
}

/// Newest first, as every new entry goes right below the form.
pub fn sidebar(collection: &WorkoutCollection) -> Vec<SidebarEntry> {
    collection.iter().rev().map(sidebar_entry).collect()
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339("2026-10-19T08:30:00+03:00").unwrap()
    }

    #[test]
    fn running_marker() {
        let run = WorkoutRecord::running(WorkoutId::new("1"), Coords::new(41., 29.), 5., 30., 170., ts());
        let marker = marker(&run, &TrackerConfig::default());
        assert_eq!(marker.coords, Coords::new(41., 29.));
        assert_eq!(marker.popup_class, "running-popup");
        assert_eq!(marker.content, "🏃 Running session on 19.10.2026");
        assert!(!marker.auto_close && !marker.close_on_click);
    }

    #[test]
    fn running_entry_rows() {
        let run = WorkoutRecord::running(WorkoutId::new("1"), Coords::new(41., 29.), 5., 30., 170., ts());
        let entry = sidebar_entry(&run);
        assert_eq!(entry.css_class, "workout workout--running");
        let rows: Vec<(&str, &str)> = entry.details.iter().map(|r| (r.value.as_str(), r.unit)).collect();
        assert_eq!(rows, [("5", "km"), ("30", "min"), ("6.00", "min/km"), ("170", "spm")]);
    }

    #[test]
    fn cycling_entry_rows() {
        let ride = WorkoutRecord::cycling(WorkoutId::new("2"), Coords::new(41., 29.), 20., 60., 300., ts());
        let entry = sidebar_entry(&ride);
        let rows: Vec<(&str, &str)> = entry.details.iter().map(|r| (r.value.as_str(), r.unit)).collect();
        assert_eq!(rows, [("20", "km"), ("60", "min"), ("0.01", "km/h"), ("300", "m")]);
        assert_eq!(marker(&ride, &TrackerConfig::default()).popup_class, "cycling-popup");
    }

    #[test]
    fn projections_are_repeatable() {
        let run = WorkoutRecord::running(WorkoutId::new("1"), Coords::new(41., 29.), 2.5, 14., 160., ts());
        assert_eq!(sidebar_entry(&run), sidebar_entry(&run));
        assert_eq!(sidebar_entry(&run).details[0].value, "2.5");
    }

    #[test]
    fn sidebar_is_newest_first() {
        let mut collection = WorkoutCollection::new();
        for id in ["old", "new"] {
            collection.push(WorkoutRecord::running(WorkoutId::new(id), Coords::new(0., 0.), 1., 1., 1., ts())).unwrap();
        }
        let ids: Vec<String> = sidebar(&collection).into_iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, ["new", "old"]);
    }
}
