//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub secret: String,
    pub templates_dir: String,
    /// Endpoint returning the employee collection as a JSON array.
    pub sheet_read_url: String,
    /// Endpoint accepting one employee record per JSON POST.
    pub sheet_write_url: String,
    /// Credential for the generative API; the builtin sample is used when
    /// absent.
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub gemini_model: Option<String>,
}
