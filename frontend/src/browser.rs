//! Browser backed collaborators of the session controller.

use chrono::{DateTime, FixedOffset, Local};
use gloo_console::error;
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError, Storage};
use workout_tracker_lib::{
    controller::{Clock, Notifier},
    storage::KeyValueStorage,
    workout::Coords,
    Result, TrackerError,
};

fn js_error(context: &str, err: JsValue) -> TrackerError {
    TrackerError::Storage(format!("{context}: {}", err.as_string().unwrap_or_else(|| format!("{err:?}"))))
}

/// `window.localStorage`. When the browser refuses access every call fails,
/// the session still runs in memory.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = match window().local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                error!(format!("local storage unavailable: {err:?}"));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| TrackerError::Storage("local storage unavailable".into()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(|err| js_error("read failed", err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(|err| js_error("write failed", err))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(|err| js_error("remove failed", err))
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            error!(format!("alert failed: {err:?}"));
        }
    }
}

/// Asks for the current position once. One of the callbacks runs when the browser answers.
pub fn locate(on_position: impl FnOnce(Coords) + 'static, on_error: impl FnOnce(String) + 'static) {
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            on_error(format!("{err:?}"));
            return;
        }
    };

    let success = Closure::once_into_js(move |position: GeolocationPosition| {
        let coords = position.coords();
        on_position(Coords::new(coords.latitude(), coords.longitude()));
    });
    let failure = Closure::once_into_js(move |err: GeolocationPositionError| {
        on_error(err.message());
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref())) {
        error!(format!("geolocation request failed: {err:?}"));
    }
}
