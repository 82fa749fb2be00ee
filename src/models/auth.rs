use serde::{Deserialize, Serialize};

/// Marketplace role carried by the cached user record.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Consultant",
            Role::Admin => "Administrator",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

/// The single record persisted to localStorage between visits.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoredSession {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ErrorInfo {
    pub message: Option<String>,
    pub code: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VerifyResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Seller).ok(), Some("\"seller\"".to_string()));
        let parsed: Role = serde_json::from_str("\"admin\"").expect("role should parse");
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn session_user_round_trips_camel_case() {
        let json = r#"{"displayName":"Amara Okafor","email":"amara@example.com","role":"seller"}"#;
        let user: SessionUser = serde_json::from_str(json).expect("user should parse");
        assert_eq!(user.display_name, "Amara Okafor");
        assert_eq!(user.role, Role::Seller);
    }

    #[test]
    fn login_response_tolerates_missing_optional_fields() {
        let json = r#"{"success":false,"error":{"message":"Invalid credentials","code":"AUTH_FAILED"}}"#;
        let response: LoginResponse = serde_json::from_str(json).expect("response should parse");
        assert!(!response.success);
        assert!(response.token.is_none());
        assert_eq!(
            response.error.and_then(|e| e.message),
            Some("Invalid credentials".to_string())
        );
    }
}
