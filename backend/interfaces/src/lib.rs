pub mod api;
pub mod connector_types;
