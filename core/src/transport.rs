use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::config::ClientConfig;
use crate::error::FetchError;

/// Henter rå JSON for en sti (prod: `HttpTransport`, test: hermetiske svar).
pub trait Transport: Send + Sync {
    fn get_json(&self, path: &str) -> Result<Value, FetchError>;
}

/// SportSee-backend over HTTP – enkel blocking-versjon (ureq)
pub struct HttpTransport {
    agent: Agent,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            config: config.clone(),
        }
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.config.url_for(path);
        log::debug!("GET {url}");

        let resp = match self.agent.get(&url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(t)) => return Err(FetchError::Network(t.to_string())),
        };

        resp.into_json::<Value>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_backend_is_a_network_error() {
        // port 9 (discard) er i praksis aldri åpen lokalt
        let cfg = ClientConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..ClientConfig::default()
        };
        let transport = HttpTransport::new(&cfg);
        let err = transport.get_json("/user/12").unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    }
}
