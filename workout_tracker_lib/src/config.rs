use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "workouts";
pub const DEFAULT_ZOOM_LEVEL: f64 = 13.0;

/// Settings shared by the controller and the views it drives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Name of the local storage slot holding the whole collection.
    pub storage_key: String,
    pub zoom_level: f64,
    pub popup_max_width: f64,
    pub popup_min_width: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            zoom_level: DEFAULT_ZOOM_LEVEL,
            popup_max_width: 250.,
            popup_min_width: 100.,
        }
    }
}
