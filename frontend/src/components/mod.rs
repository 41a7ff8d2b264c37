pub mod settings_drawer;
pub mod settings_fields;
