use std::collections::HashMap;

use gloo_console::info;
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlElement, Node};
use workout_tracker_lib::{
    controller::MapSurface,
    projection::MarkerProjection,
    workout::{Coords, WorkoutId},
};
use yew::prelude::*;

use crate::config::{MAX_ZOOM, TILE_ATTRIBUTION, TILE_URL};

/// The element Leaflet draws into. Created once and handed to Yew as a raw node.
pub fn map_container() -> HtmlElement {
    let container = document().create_element("div").expect("create map element");
    let container: HtmlElement = container.dyn_into().expect("div is an HtmlElement");
    container.set_id("map");
    container
}

pub fn render_map(container: &HtmlElement) -> Html {
    let node: &Node = container.as_ref();
    Html::VRef(node.clone())
}

/// Leaflet map holding one marker per workout.
pub struct LeafletSurface {
    map: Map,
    markers: HashMap<WorkoutId, Marker>,
    _on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl LeafletSurface {
    pub fn new(container: &HtmlElement, on_click: Callback<Coords>) -> Self {
        let map = Map::new_with_element(container, &MapOptions::default());
        map.set_max_zoom(MAX_ZOOM);
        add_tile_layer(&map);

        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let at = event.lat_lng();
            on_click.emit(Coords::new(at.lat(), at.lng()));
        });
        map.on("click", on_click.as_ref());

        Self {
            map,
            markers: HashMap::new(),
            _on_click: on_click,
        }
    }
}

impl MapSurface for LeafletSurface {
    fn set_view(&mut self, center: Coords, zoom: f64) {
        self.map.invalidate_size(false);
        self.map.set_view(&LatLng::new(center.lat, center.lng), zoom);
    }

    fn add_marker(&mut self, projection: &MarkerProjection) {
        let opts = PopupOptions::default();
        opts.set_max_width(projection.max_width);
        opts.set_min_width(projection.min_width);
        opts.set_auto_close(projection.auto_close);
        opts.set_close_on_click(projection.close_on_click);
        opts.set_class_name(projection.popup_class.clone());

        let popup = Popup::new(&opts, None);
        popup.set_content(&projection.content.clone().into());

        let marker = Marker::new(&LatLng::new(projection.coords.lat, projection.coords.lng));
        marker.add_to(&self.map);
        marker.bind_popup(&popup);
        marker.open_popup();

        if let Some(previous) = self.markers.insert(projection.id.clone(), marker) {
            previous.remove();
        }
        info!(format!("Added marker for workout {}", projection.id));
    }

    fn remove_marker(&mut self, id: &WorkoutId) {
        if let Some(marker) = self.markers.remove(id) {
            marker.remove();
        }
    }

    fn clear_markers(&mut self) {
        for marker in self.markers.values() {
            marker.remove();
        }
        self.markers.clear();
    }
}

fn add_tile_layer(map: &Map) {
    let opts = TileLayerOptions::new();
    opts.set_attribution(TILE_ATTRIBUTION.into());
    opts.set_update_when_idle(true);
    TileLayer::new_options(TILE_URL, &opts).add_to(map);
}
