pub mod service;

pub use service::{call_connector_api, ConnectorTransport, HttpTransport};
