use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{
    kind::{FormField, Kind},
    validation::FormFields,
};
use yew::prelude::*;

/// Handles to the form's input elements, read on submit.
#[derive(Clone, Default, PartialEq)]
pub struct FormInputs {
    pub distance: NodeRef,
    pub duration: NodeRef,
    pub cadence: NodeRef,
    pub elevation_gain: NodeRef,
}

impl FormInputs {
    fn node(&self, field: FormField) -> &NodeRef {
        match field {
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Cadence => &self.cadence,
            FormField::ElevationGain => &self.elevation_gain,
        }
    }

    pub fn clear(&self) {
        for field in [FormField::Distance, FormField::Duration, FormField::Cadence, FormField::ElevationGain] {
            if let Some(input) = self.node(field).cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
    }

    pub fn focus_distance(&self) {
        if let Some(input) = self.distance.cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }
}

impl FormFields for FormInputs {
    fn value(&self, field: FormField) -> String {
        self.node(field)
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct FormProps {
    pub hidden: bool,
    pub kind: Kind,
    pub inputs: FormInputs,
    pub on_submit: Callback<()>,
    pub on_kind: Callback<Kind>,
}

#[function_component]
pub fn WorkoutForm(props: &FormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onchange = {
        let on_kind = props.on_kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<Kind>() {
                on_kind.emit(kind);
            }
        })
    };

    let visible = props.kind.profile().field;
    let row_class = |field: FormField| classes!("form__row", (visible != field).then_some("form__row--hidden"));

    html! {
        <form class={classes!("form", props.hidden.then_some("hidden"))} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{ "Type" }</label>
                <select class="form__input form__input--type" {onchange}>
                    { for Kind::ALL.into_iter().map(|kind| html! {
                        <option value={kind.as_str()} selected={kind == props.kind}>{ kind.profile().name }</option>
                    }) }
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{ "Distance" }</label>
                <input class="form__input form__input--distance" placeholder="km" ref={props.inputs.distance.clone()} />
            </div>
            <div class="form__row">
                <label class="form__label">{ "Duration" }</label>
                <input class="form__input form__input--duration" placeholder="min" ref={props.inputs.duration.clone()} />
            </div>
            <div class={row_class(FormField::Cadence)}>
                <label class="form__label">{ "Cadence" }</label>
                <input class="form__input form__input--cadence" placeholder="step/min" ref={props.inputs.cadence.clone()} />
            </div>
            <div class={row_class(FormField::ElevationGain)}>
                <label class="form__label">{ "Elev Gain" }</label>
                <input class="form__input form__input--elevation" placeholder="meters" ref={props.inputs.elevation_gain.clone()} />
            </div>
            <button class="form__btn">{ "OK" }</button>
        </form>
    }
}
