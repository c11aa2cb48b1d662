use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};

use crate::{
    config::TrackerConfig,
    kind::{FormField, Kind},
    projection::{self, MarkerProjection, SidebarEntry},
    storage::{KeyValueStorage, WorkoutStore},
    validation::{validate, FormFields},
    workout::{Coords, WorkoutCollection, WorkoutId, WorkoutRecord},
    Result, TrackerError,
};

pub const INVALID_INPUT_ALERT: &str = "Inputs have to be positive numbers!";
pub const NO_POSITION_ALERT: &str = "Could not get your position";

/// The map the workouts are drawn on.
pub trait MapSurface {
    fn set_view(&mut self, center: Coords, zoom: f64);
    /// Adds the marker and opens its popup right away.
    fn add_marker(&mut self, marker: &MarkerProjection);
    fn remove_marker(&mut self, id: &WorkoutId);
    fn clear_markers(&mut self);
}

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Blocking messages to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Hidden,
    /// Waiting for the details of a workout at `at`.
    AwaitingInput { at: Coords },
}

/// Owns the workout collection and sequences every user action:
/// validate, construct, store, persist, render.
pub struct SessionController<M, S, C, N> {
    map: Option<M>,
    store: WorkoutStore<S>,
    clock: C,
    notifier: N,
    config: TrackerConfig,
    workouts: WorkoutCollection,
    form: FormState,
    form_kind: Kind,
    highlighted: HashSet<WorkoutId>,
}

impl<M, S, C, N> SessionController<M, S, C, N>
where
    M: MapSurface,
    S: KeyValueStorage,
    C: Clock,
    N: Notifier,
{
    pub fn new(storage: S, clock: C, notifier: N, config: TrackerConfig) -> Self {
        let store = WorkoutStore::new(storage, config.storage_key.clone());
        Self {
            map: None,
            store,
            clock,
            notifier,
            config,
            workouts: WorkoutCollection::new(),
            form: FormState::Hidden,
            form_kind: Kind::Running,
            highlighted: HashSet::new(),
        }
    }

    /// Replaces the in-memory collection with the persisted one. Reads only.
    pub fn restore(&mut self) -> Result<usize> {
        self.workouts = self.store.load()?;
        tracing::info!(workouts = self.workouts.len(), "restored workouts");

        if let Some(map) = self.map.as_mut() {
            map.clear_markers();
            for workout in &self.workouts {
                map.add_marker(&projection::marker(workout, &self.config));
            }
        }
        Ok(self.workouts.len())
    }

    /// The position is known and the map exists, draw what we have.
    pub fn attach_map(&mut self, mut map: M, position: Coords) {
        map.set_view(position, self.config.zoom_level);
        for workout in &self.workouts {
            map.add_marker(&projection::marker(workout, &self.config));
        }
        tracing::info!(lat = position.lat, lng = position.lng, "map attached");
        self.map = Some(map);
    }

    pub fn geolocation_failed(&self, reason: &str) {
        tracing::warn!(reason, "geolocation failed");
        self.notifier.alert(NO_POSITION_ALERT);
    }

    pub fn open_form(&mut self, at: Coords) {
        tracing::debug!(lat = at.lat, lng = at.lng, "form opened");
        self.form = FormState::AwaitingInput { at };
    }

    pub fn select_kind(&mut self, kind: Kind) {
        self.form_kind = kind;
    }

    /// The kind specific input currently shown in the form.
    pub fn visible_field(&self) -> FormField {
        self.form_kind.profile().field
    }

    /// Returns the id of the new workout, or `None` when the input was
    /// rejected and the form stays open.
    pub fn submit(&mut self, form: &impl FormFields) -> Result<Option<WorkoutId>> {
        let FormState::AwaitingInput { at } = self.form else {
            return Err(TrackerError::FormClosed);
        };

        let input = match validate(self.form_kind, form) {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(%err, "rejected workout input");
                self.notifier.alert(INVALID_INPUT_ALERT);
                return Ok(None);
            }
        };

        let timestamp = self.clock.now();
        let id = WorkoutId::generate(&timestamp, |id| self.workouts.contains(id));
        let workout = WorkoutRecord::new(input.kind, id.clone(), at, input.distance, input.duration, input.field_value, timestamp);

        // Nothing changes unless the new collection is stored
        let mut workouts = self.workouts.clone();
        workouts.push(workout)?;
        self.store.save(&workouts)?;
        self.workouts = workouts;
        self.form = FormState::Hidden;

        if let (Some(map), Some(workout)) = (self.map.as_mut(), self.workouts.get(&id)) {
            map.add_marker(&projection::marker(workout, &self.config));
        }

        tracing::info!(%id, kind = %input.kind, "added workout");
        Ok(Some(id))
    }

    /// Sidebar click: toggles the entry's highlight and pans the map to it.
    pub fn select(&mut self, id: &WorkoutId) -> Result<()> {
        let coords = self
            .workouts
            .get(id)
            .map(WorkoutRecord::coords)
            .ok_or_else(|| TrackerError::UnknownWorkout(id.clone()))?;

        if !self.highlighted.remove(id) {
            self.highlighted.insert(id.clone());
        }

        if let Some(map) = self.map.as_mut() {
            map.set_view(coords, self.config.zoom_level);
        }
        Ok(())
    }

    /// Drops one workout together with its marker and sidebar entry.
    pub fn remove(&mut self, id: &WorkoutId) -> Result<()> {
        let mut workouts = self.workouts.clone();
        workouts
            .remove(id)
            .ok_or_else(|| TrackerError::UnknownWorkout(id.clone()))?;
        self.store.save(&workouts)?;
        self.workouts = workouts;
        self.highlighted.remove(id);

        if let Some(map) = self.map.as_mut() {
            map.remove_marker(id);
        }
        tracing::info!(%id, "removed workout");
        Ok(())
    }

    /// Back to the state of a first visit. Safe to call with nothing stored.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.workouts.clear();
        self.highlighted.clear();
        self.form = FormState::Hidden;
        self.form_kind = Kind::Running;

        if let Some(map) = self.map.as_mut() {
            map.clear_markers();
        }
        tracing::info!("session reset");
        Ok(())
    }

    pub fn workouts(&self) -> &WorkoutCollection {
        &self.workouts
    }

    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        projection::sidebar(&self.workouts)
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn form_kind(&self) -> Kind {
        self.form_kind
    }

    pub fn is_highlighted(&self, id: &WorkoutId) -> bool {
        self.highlighted.contains(id)
    }

    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
