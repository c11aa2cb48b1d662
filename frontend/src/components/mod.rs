pub mod map_component;
pub mod sidebar;
pub mod workout_form;
