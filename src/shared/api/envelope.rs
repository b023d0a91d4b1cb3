// src/shared/api/envelope.rs
use serde::Deserialize;

//
// ──────────────────────────────────────────────────────────
// Response envelope
// ──────────────────────────────────────────────────────────
// Every mutating endpoint of the portfolio API answers with
// `{ "success": bool, <payload key>: ..., "error": "..." }`.
// The payload key differs per endpoint (`project`, `portfolio`,
// `filename`, `resume_data`), so the payload type is flattened in
// and each adapter supplies its own body struct with defaulted
// optional fields.
//

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(flatten)]
    pub body: T,
}

/// Bare `{ success, error }` view of a response, for endpoints whose
/// payload is ignored and for extracting the message of a failed call.
#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub error: Option<String>,
}

/// The server answered but flagged the call as unsuccessful.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ServerRejection(pub String);

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a confirmed response.
    pub fn confirmed(self) -> Result<T, ServerRejection> {
        if self.success {
            Ok(self.body)
        } else {
            Err(ServerRejection(self.error.unwrap_or_else(|| {
                "unknown server error".to_string()
            })))
        }
    }
}

impl ApiStatus {
    pub fn confirmed(self) -> Result<(), ServerRejection> {
        if self.success {
            Ok(())
        } else {
            Err(ServerRejection(self.error.unwrap_or_else(|| {
                "unknown server error".to_string()
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct NamePayload {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn confirmed_envelope_yields_payload() {
        let envelope: ApiEnvelope<NamePayload> =
            serde_json::from_str(r#"{"success": true, "name": "banner"}"#).unwrap();

        let body = envelope.confirmed().unwrap();
        assert_eq!(body.name.as_deref(), Some("banner"));
    }

    #[test]
    fn rejected_envelope_carries_server_message() {
        let envelope: ApiEnvelope<NamePayload> =
            serde_json::from_str(r#"{"success": false, "error": "Project not found"}"#).unwrap();

        let err = envelope.confirmed().unwrap_err();
        assert_eq!(err.to_string(), "Project not found");
    }

    #[test]
    fn rejected_envelope_without_message_gets_a_fallback() {
        let envelope: ApiEnvelope<NamePayload> =
            serde_json::from_str(r#"{"success": false}"#).unwrap();

        let err = envelope.confirmed().unwrap_err();
        assert_eq!(err.to_string(), "unknown server error");
    }

    #[test]
    fn status_view_parses_without_payload_keys() {
        let status: ApiStatus =
            serde_json::from_str(r#"{"success": true, "deleted": {"id": "1"}}"#).unwrap();
        assert!(status.confirmed().is_ok());
    }
}
