// Tabspace services
// Stateless workspace logic (geometry, classification, projection, layout),
// address bar handling, settings persistence and the backend client.

pub mod address_resolver;
pub mod backend_client;
pub mod classifier;
pub mod geometry;
pub mod layout;
pub mod settings_engine;
pub mod view_projector;
