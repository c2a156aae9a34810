//! Shared data context for API request handlers.

use std::sync::Arc;
use crate::ca::structs::ca_handler::CaHandler;
use crate::config::structs::api_server_config::ApiServerConfig;

/// Shared application data available to all API request handlers.
///
/// Injected into Actix-web's application data; every field is shared across
/// the worker threads of one listener.
#[derive(Debug)]
pub struct ApiServiceData {
    /// The request handler shared by all listeners.
    pub ca_handler: Arc<CaHandler>,

    /// Configuration for this API server instance.
    pub api_server_config: Arc<ApiServerConfig>,

    /// Token required by the statistics endpoint.
    pub api_key: String,
}
