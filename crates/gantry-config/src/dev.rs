//! Dev server binding for attached-debugger sessions.

use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Fixed address the UI dev server binds to under an attached debugger.
///
/// External debugger launch configurations hardcode this URL, so it is a
/// constant rather than a knob.
pub const DEBUG_SERVER_URL: &str = "http://127.0.0.1:7777/";

/// Host and port extracted from a debug server URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerBinding {
    pub host: String,
    pub port: u16,
}

impl DevServerBinding {
    /// Parses an `http://host:port/` URL into a binding.
    pub fn parse(url: &str) -> Result<Self> {
        let invalid = || ConfigError::DebugUrl(url.to_string());
        let rest = url.strip_prefix("http://").ok_or_else(invalid)?;
        let authority = match rest.split_once('/') {
            Some((authority, _)) => authority,
            None => rest,
        };
        let (host, port) = authority.split_once(':').ok_or_else(invalid)?;
        if host.is_empty() {
            return Err(invalid());
        }
        let port = port.parse::<u16>().map_err(|_| invalid())?;
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_debug_url() {
        let binding = DevServerBinding::parse(DEBUG_SERVER_URL).unwrap();
        assert_eq!(binding.host, "127.0.0.1");
        assert_eq!(binding.port, 7777);
        assert_eq!(binding.url(), DEBUG_SERVER_URL);
    }

    #[test]
    fn rejects_malformed_urls() {
        for url in [
            "https://127.0.0.1:7777/",
            "http://127.0.0.1/",
            "http://:7777/",
            "http://127.0.0.1:not-a-port/",
            "http://127.0.0.1:99999/",
            "127.0.0.1:7777",
        ] {
            let err = DevServerBinding::parse(url).unwrap_err();
            assert!(matches!(err, ConfigError::DebugUrl(_)), "{url} should be rejected");
        }
    }
}
