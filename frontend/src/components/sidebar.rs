use std::collections::HashSet;

use workout_tracker_lib::{projection::SidebarEntry, workout::WorkoutId};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct SidebarProps {
    pub entries: Vec<SidebarEntry>,
    pub highlighted: HashSet<WorkoutId>,
    pub on_select: Callback<WorkoutId>,
    pub on_remove: Callback<WorkoutId>,
}

#[function_component]
pub fn WorkoutList(props: &SidebarProps) -> Html {
    html! {
        <ul class="workouts">
            { for props.entries.iter().map(|entry| entry_view(entry, props)) }
        </ul>
    }
}

fn entry_view(entry: &SidebarEntry, props: &SidebarProps) -> Html {
    let select = {
        let id = entry.id.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };
    let remove = {
        let id = entry.id.clone();
        let on_remove = props.on_remove.clone();
        Callback::from(move |e: MouseEvent| {
            // Do not select the entry that is going away
            e.stop_propagation();
            on_remove.emit(id.clone());
        })
    };

    let mut class: Classes = entry.css_class.split_whitespace().map(str::to_owned).collect();
    if props.highlighted.contains(&entry.id) {
        class.push("workout_active");
    }

    html! {
        <li {class} data-id={entry.id.to_string()} onclick={select}>
            <h2 class="workout__title">{ entry.title.clone() }</h2>
            <button class="workout__remove" onclick={remove}>{ "✕" }</button>
            { for entry.details.iter().map(|row| html! {
                <div class="workout__details">
                    <span class="workout__icon">{ row.icon }</span>
                    <span class="workout__value">{ row.value.clone() }</span>
                    <span class="workout__unit">{ row.unit }</span>
                </div>
            }) }
        </li>
    }
}
