use serde::{Deserialize, Serialize};

use crate::enums::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub username: String,
}

/// GET /me, read from the token claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub division: String,
}

/// Who is logged in, as kept by the client between page loads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionInfo {
    pub username: String,
    pub role: Role,
    pub division: String,
}

impl SessionInfo {
    pub fn from_login(resp: &LoginResponse) -> Self {
        Self {
            username: resp.username.clone(),
            role: Role::parse(&resp.role),
            division: resp.division.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Division a "user"-role account is pinned to when creating records
    pub fn locked_division(&self) -> Option<String> {
        if self.is_admin() || self.division.trim().is_empty() {
            None
        } else {
            Some(self.division.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_login() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"t","role":"user","division":"IT Solutions","username":"budi"}"#,
        )
        .unwrap();
        let session = SessionInfo::from_login(&resp);
        assert!(!session.is_admin());
        assert_eq!(session.locked_division().as_deref(), Some("IT Solutions"));
    }

    #[test]
    fn test_admin_is_never_locked() {
        let session = SessionInfo {
            username: "root".into(),
            role: Role::Admin,
            division: "IT Solutions".into(),
        };
        assert_eq!(session.locked_division(), None);
    }

    #[test]
    fn test_unknown_role_is_restricted() {
        let resp = LoginResponse {
            token: "t".into(),
            role: "superuser".into(),
            division: String::new(),
            username: "x".into(),
        };
        let session = SessionInfo::from_login(&resp);
        assert_eq!(session.role, Role::User);
        assert_eq!(session.locked_division(), None);
    }
}
