pub mod api;
pub mod card_entry;
pub mod connector_integration;
pub mod connector_types;
pub mod dispatcher;
pub mod transport;
pub mod web_surface;
