use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::Value;

/// Response status constants carried in the envelope body.
///
/// `DB_ERROR` is an internal constant outside the HTTP range; responses
/// carrying it are emitted with HTTP 500 while the body keeps the code.
pub mod status {
    pub const OK: u16 = 200;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const DB_ERROR: u16 = 600;
}

/// Messages attached to every handler outcome.
pub mod message {
    pub const NULL_VALUE: &str = "Required value is missing";
    pub const ALREADY_EMAIL: &str = "Email is already registered";
    pub const AVAILABLE_EMAIL: &str = "Email is available";
    pub const DIFFERENT_PW: &str = "Password confirmation does not match";
    pub const CREATED_USER: &str = "Signed up successfully";
    pub const NO_USER: &str = "No such user";
    pub const MISS_MATCH_PW: &str = "Password does not match";
    pub const LOGIN_SUCCESS: &str = "Signed in successfully";
    pub const SEND_EMAIL_SUCCESS: &str = "Temporary password sent";
    pub const DB_ERROR: &str = "Database error";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
}

/// Uniform response wrapper used for every handler outcome.
///
/// Success carries a payload in `data`; failure omits the field entirely.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(code: u16, message: &str, data: Value) -> Self {
        Self {
            code,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn fail(code: u16, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            data: None,
        }
    }

    /// Render as an HTTP response. Codes outside the standard HTTP
    /// status range go out as 500 on the wire, the body keeps the code.
    pub fn into_response(self) -> HttpResponse {
        let status = if (100..=599).contains(&self.code) {
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope::success(
            status::OK,
            message::AVAILABLE_EMAIL,
            json!({"email": "a@x.com"}),
        );

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["code"], 200);
        assert_eq!(value["message"], message::AVAILABLE_EMAIL);
        assert_eq!(value["data"]["email"], "a@x.com");
    }

    #[test]
    fn test_fail_envelope_omits_data() {
        let envelope = Envelope::fail(status::OK, message::NULL_VALUE);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["code"], 200);
        assert_eq!(value["message"], message::NULL_VALUE);
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_db_error_code_falls_back_on_the_wire() {
        let response = Envelope::fail(status::DB_ERROR, message::DB_ERROR).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
