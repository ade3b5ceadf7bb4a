//! Outbound request description for the comment feed.
//!
//! The plugin shim turns a [`FetchRequest`] into a Zellij `web_request` call.
//! The context map travels with the request and comes back attached to the
//! `WebRequestResult` event, which is how the shim recognises our response.

use crate::Config;
use std::collections::BTreeMap;

/// Context key identifying which request a host response belongs to.
pub const CONTEXT_KEY: &str = "commentary_request";

/// Context value for the startup records fetch.
pub const RECORDS_CONTEXT: &str = "records";

/// A read-only GET against the comment endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Absolute URL of the endpoint.
    pub url: String,

    /// Request headers.
    pub headers: BTreeMap<String, String>,

    /// Opaque context echoed back by the host with the response.
    pub context: BTreeMap<String, String>,
}

impl FetchRequest {
    /// Builds the records request for the configured endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use commentary::source::FetchRequest;
    /// use commentary::Config;
    ///
    /// let request = FetchRequest::from_config(&Config::default());
    /// assert_eq!(request.url, "https://jsonplaceholder.typicode.com/comments");
    /// assert!(FetchRequest::is_response(&request.context));
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KEY.to_string(), RECORDS_CONTEXT.to_string());

        Self {
            url: config.endpoint.clone(),
            headers,
            context,
        }
    }

    /// Returns `true` when a response context belongs to the records fetch.
    #[must_use]
    pub fn is_response(context: &BTreeMap<String, String>) -> bool {
        context.get(CONTEXT_KEY).map(String::as_str) == Some(RECORDS_CONTEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_endpoint() {
        let config = Config {
            endpoint: "http://localhost:3000/comments".to_string(),
            ..Config::default()
        };
        let request = FetchRequest::from_config(&config);
        assert_eq!(request.url, "http://localhost:3000/comments");
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn foreign_context_is_not_ours() {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KEY.to_string(), "something-else".to_string());
        assert!(!FetchRequest::is_response(&context));
        assert!(!FetchRequest::is_response(&BTreeMap::new()));
    }
}
