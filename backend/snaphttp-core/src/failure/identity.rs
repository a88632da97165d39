use const_format::concatcp;
use serde::{Deserialize, Serialize};

/// Library name and version stamped into diagnostic banners.
pub const DEFAULT_LIBRARY_AGENT: &str = concatcp!("snaphttp/", env!("CARGO_PKG_VERSION"));

/// Transport the blocking client is built on.
pub const DEFAULT_TRANSPORT_AGENT: &str = "reqwest/0.13";

/// Naming used by diagnostics and the client's `User-Agent` header.
///
/// Passed explicitly to whatever renders a failure so that output never
/// depends on process-wide initialisation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    #[serde(default = "default_library_agent")]
    pub library_agent: String,
    #[serde(default = "default_transport_agent")]
    pub transport_agent: String,
}

impl ClientIdentity {
    pub fn new(library_agent: impl Into<String>, transport_agent: impl Into<String>) -> Self {
        Self {
            library_agent: library_agent.into(),
            transport_agent: transport_agent.into(),
        }
    }

    /// Value sent as the `User-Agent` request header.
    pub fn user_agent(&self) -> String {
        format!("{} {}", self.library_agent, self.transport_agent)
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARY_AGENT, DEFAULT_TRANSPORT_AGENT)
    }
}

fn default_library_agent() -> String {
    DEFAULT_LIBRARY_AGENT.to_string()
}
fn default_transport_agent() -> String {
    DEFAULT_TRANSPORT_AGENT.to_string()
}
