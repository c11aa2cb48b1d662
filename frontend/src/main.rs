use std::collections::HashSet;

use browser::{AlertNotifier, LocalStorage, SystemClock};
use components::{
    map_component::{map_container, render_map, LeafletSurface},
    sidebar::WorkoutList,
    workout_form::{FormInputs, WorkoutForm},
};
use gloo_console::{error, info};
use web_sys::HtmlElement;
use workout_tracker_lib::{
    controller::{FormState, Notifier, SessionController},
    kind::Kind,
    workout::{Coords, WorkoutId},
    TrackerConfig, TrackerError,
};
use yew::prelude::*;

mod browser;
mod components;
mod config;

type Controller = SessionController<LeafletSurface, LocalStorage, SystemClock, AlertNotifier>;

enum MainMsg {
    Located(Coords),
    LocationFailed(String),
    MapClicked(Coords),
    KindChanged(Kind),
    Submit,
    Select(WorkoutId),
    Remove(WorkoutId),
    Reset,
}

struct Model {
    controller: Controller,
    map_container: HtmlElement,
    inputs: FormInputs,
    focus_form: bool,
}

impl Model {
    /// A bad or unreadable slot is reported and the session starts empty,
    /// so the map and reset keep working.
    fn start_session() -> Controller {
        let mut controller = SessionController::new(LocalStorage::open(), SystemClock, AlertNotifier, TrackerConfig::default());
        match controller.restore() {
            Ok(restored) => info!(format!("Restored {} workouts", restored)),
            Err(err) => Self::report(err),
        }
        controller
    }

    fn report(err: TrackerError) {
        error!(format!("{err}"));
        AlertNotifier.alert(&err.to_string());
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let located = ctx.link().callback(MainMsg::Located);
        let failed = ctx.link().callback(MainMsg::LocationFailed);
        browser::locate(move |coords| located.emit(coords), move |reason| failed.emit(reason));

        Self {
            controller: Self::start_session(),
            map_container: map_container(),
            inputs: FormInputs::default(),
            focus_form: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let controller = &mut self.controller;

        let result = match msg {
            MainMsg::Located(position) => {
                let surface = LeafletSurface::new(&self.map_container, ctx.link().callback(MainMsg::MapClicked));
                controller.attach_map(surface, position);
                info!(format!("Map centered on {}, {}", position.lat, position.lng));
                Ok(())
            }
            MainMsg::LocationFailed(reason) => {
                error!(format!("Geolocation failed: {reason}"));
                controller.geolocation_failed(&reason);
                Ok(())
            }
            MainMsg::MapClicked(at) => {
                controller.open_form(at);
                self.focus_form = true;
                Ok(())
            }
            MainMsg::KindChanged(kind) => {
                controller.select_kind(kind);
                Ok(())
            }
            MainMsg::Submit => controller.submit(&self.inputs).map(|added| match added {
                Some(id) => {
                    info!(format!("Added workout {id}, {} in total", controller.workouts().len()));
                    self.inputs.clear();
                }
                None => info!("Rejected workout input"),
            }),
            MainMsg::Select(id) => controller.select(&id),
            MainMsg::Remove(id) => controller.remove(&id).map(|()| info!(format!("Removed workout {id}"))),
            MainMsg::Reset => controller.reset().map(|()| {
                info!("Session reset");
                self.inputs.clear();
            }),
        };

        if let Err(err) = result {
            Self::report(err);
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.focus_form {
            self.focus_form = false;
            self.inputs.focus_distance();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_reset = link.callback(|_: MouseEvent| MainMsg::Reset);

        let controller = &self.controller;
        let hidden = controller.form_state() == FormState::Hidden;
        let kind = controller.form_kind();
        let entries = controller.sidebar_entries();
        let highlighted: HashSet<WorkoutId> = controller
            .workouts()
            .iter()
            .map(|w| w.id().clone())
            .filter(|id| controller.is_highlighted(id))
            .collect();

        html! {
            <>
                <div class="sidebar">
                    <WorkoutForm
                        {hidden}
                        {kind}
                        inputs={self.inputs.clone()}
                        on_submit={link.callback(|()| MainMsg::Submit)}
                        on_kind={link.callback(MainMsg::KindChanged)}
                    />
                    <WorkoutList
                        {entries}
                        {highlighted}
                        on_select={link.callback(MainMsg::Select)}
                        on_remove={link.callback(MainMsg::Remove)}
                    />
                    <button class="reset_btn" onclick={on_reset}>{ "Reset" }</button>
                </div>
                { render_map(&self.map_container) }
            </>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
