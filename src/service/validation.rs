//! Required-field validation for write bodies.

use crate::error::AppError;
use crate::model::Resource;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Check that every required field of `R` is present, then decode the typed payload.
    /// A key holding `null` counts as missing. Empty strings pass. Unknown keys are ignored.
    pub fn validate<R: Resource>(body: Value) -> Result<R::Payload, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        };
        let missing: Vec<&str> = R::DEF
            .required_fields()
            .filter(|f| matches!(map.get(*f), None | Some(Value::Null)))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
        serde_json::from_value(Value::Object(map)).map_err(|e| AppError::Validation(e.to_string()))
    }
}
