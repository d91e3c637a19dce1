//! In-memory transport for tests.
//!
//! [`MockTransport`] serves canned bodies by URI, injects per-URI failures,
//! and records every PATCH it receives. Unit tests and doctests in this crate
//! use it instead of a live service; downstream crates can do the same.
//!
//! ```
//! use std::sync::Arc;
//! use redfish_model::mock::MockTransport;
//! use redfish_model::{SharedTransport, Transport};
//!
//! let mock = Arc::new(
//!     MockTransport::new().with_resource("/redfish/v1/Chassis/1", r#"{"Id": "1"}"#),
//! );
//! let transport: SharedTransport = mock.clone();
//! assert!(transport.get("/redfish/v1/Chassis/1").is_ok());
//! assert_eq!(mock.patch_count(), 0);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::TransportError;
use crate::transport::Transport;

enum Route {
    Body(Vec<u8>),
    Fail(String),
}

/// Scriptable [`Transport`] serving fixed responses.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Route>>,
    patches: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for GETs of `uri`.
    pub fn with_resource(self, uri: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(uri.into(), Route::Body(body.into()));
        self
    }

    /// Serve a JSON value for GETs of `uri`.
    pub fn with_json(self, uri: impl Into<String>, body: &Value) -> Self {
        let encoded = body.to_string().into_bytes();
        self.with_resource(uri, encoded)
    }

    /// Fail both GET and PATCH of `uri` with a connection-level error.
    pub fn with_failure(self, uri: impl Into<String>, message: impl Into<String>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(uri.into(), Route::Fail(message.into()));
        self
    }

    /// Every PATCH recorded so far, as `(uri, decoded body)` pairs.
    pub fn patches(&self) -> Vec<(String, Value)> {
        self.patches
            .lock()
            .unwrap()
            .iter()
            .map(|(uri, body)| {
                let value = serde_json::from_slice(body).unwrap_or(Value::Null);
                (uri.clone(), value)
            })
            .collect()
    }

    /// Number of PATCH calls received.
    pub fn patch_count(&self) -> usize {
        self.patches.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn get(&self, uri: &str) -> Result<Vec<u8>, TransportError> {
        match self.routes.lock().unwrap().get(uri) {
            Some(Route::Body(body)) => Ok(body.clone()),
            Some(Route::Fail(message)) => Err(TransportError::Unavailable {
                uri: uri.to_string(),
                message: message.clone(),
            }),
            None => Err(TransportError::Http {
                uri: uri.to_string(),
                status: 404,
            }),
        }
    }

    fn patch(&self, uri: &str, body: &[u8]) -> Result<(), TransportError> {
        if let Some(Route::Fail(message)) = self.routes.lock().unwrap().get(uri) {
            return Err(TransportError::Unavailable {
                uri: uri.to_string(),
                message: message.clone(),
            });
        }
        self.patches
            .lock()
            .unwrap()
            .push((uri.to_string(), body.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serves_registered_body() {
        let mock = MockTransport::new().with_resource("/a", r#"{"Id": "a"}"#);
        let body = mock.get("/a").unwrap();
        assert_eq!(body, br#"{"Id": "a"}"#);
    }

    #[test]
    fn unknown_uri_is_not_found() {
        let mock = MockTransport::new();
        let result = mock.get("/missing");
        assert!(matches!(
            result,
            Err(TransportError::Http { status: 404, .. })
        ));
    }

    #[test]
    fn injected_failure_hits_get_and_patch() {
        let mock = MockTransport::new().with_failure("/b", "connection reset");
        assert!(matches!(
            mock.get("/b"),
            Err(TransportError::Unavailable { .. })
        ));
        assert!(matches!(
            mock.patch("/b", b"{}"),
            Err(TransportError::Unavailable { .. })
        ));
        assert_eq!(mock.patch_count(), 0);
    }

    #[test]
    fn records_patch_bodies() {
        let mock = MockTransport::new();
        mock.patch("/c", br#"{"AssetTag": "rack-4"}"#).unwrap();

        let patches = mock.patches();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].0, "/c");
        assert_eq!(patches[0].1, json!({"AssetTag": "rack-4"}));
    }
}
