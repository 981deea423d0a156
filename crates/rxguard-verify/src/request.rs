//! JSON Schema validation of raw check requests.
//!
//! Requests usually arrive as JSON from a prescribing screen. Before the
//! engine sees them, the payload is checked against a schema so that a
//! non-string entry or a `null` list fails fast instead of being coerced.
//! Every violation is collected so the caller sees them all in one error.

use serde_json::{json, Value};
use tracing::{debug, warn};

use rxguard_contracts::{
    check::CheckRequest,
    error::{RxError, RxResult},
};

/// The JSON Schema every check request must satisfy.
///
/// `drugNames` is required; the two patient lists may be omitted but must be
/// arrays of strings when present.
pub fn request_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "drugNames": {
                "type": "array",
                "items": { "type": "string" }
            },
            "patientAllergies": {
                "type": "array",
                "items": { "type": "string" }
            },
            "patientConditions": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["drugNames"]
    })
}

/// Validates raw JSON payloads and converts them into `CheckRequest`s.
pub struct RequestValidator {
    validator: jsonschema::Validator,
}

impl RequestValidator {
    /// Compile the request schema.
    ///
    /// Returns `RxError::ConfigError` if the schema document does not compile.
    pub fn new() -> RxResult<Self> {
        let validator =
            jsonschema::validator_for(&request_schema()).map_err(|e| RxError::ConfigError {
                reason: format!("invalid request schema: {e}"),
            })?;
        Ok(Self { validator })
    }

    /// Validate `payload` and deserialize it.
    ///
    /// Returns `RxError::InvalidInput` listing every schema violation.
    pub fn validate(&self, payload: &Value) -> RxResult<CheckRequest> {
        let violations: Vec<String> = self
            .validator
            .iter_errors(payload)
            .map(|error| format!("at '{}': {}", error.instance_path, error))
            .collect();

        if !violations.is_empty() {
            let reason = violations.join("; ");
            warn!(violations = violations.len(), %reason, "check request rejected");
            return Err(RxError::InvalidInput { reason });
        }

        let request: CheckRequest =
            serde_json::from_value(payload.clone()).map_err(|e| RxError::InvalidInput {
                reason: format!("request does not match CheckRequest: {e}"),
            })?;

        debug!(drugs = request.drug_names.len(), "check request accepted");
        Ok(request)
    }

    /// Parse `text` as JSON, then validate it.
    pub fn parse(&self, text: &str) -> RxResult<CheckRequest> {
        let payload: Value = serde_json::from_str(text).map_err(|e| RxError::InvalidInput {
            reason: format!("request is not valid JSON: {e}"),
        })?;
        self.validate(&payload)
    }
}
