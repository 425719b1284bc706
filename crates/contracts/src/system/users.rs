use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::enums::Role;
use crate::shared::error::ValidationError;
use crate::shared::list_query::{Searchable, SortValue, Sortable};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AggregateRoot for User {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.username.as_str(), self.division.as_str()]
    }
}

impl Sortable for User {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "role" => SortValue::text(self.role.as_str()),
            "division" => SortValue::text(self.division.as_str()),
            _ => SortValue::text(self.username.as_str()),
        }
    }
}

/// POST /users and PUT /users/:id. On edit a blank password keeps the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub division: String,
}

/// Create/edit user modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub user_id: Option<i64>,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub division: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: Some(user.id),
            username: user.username.clone(),
            password: String::new(),
            role: Role::parse(&user.role),
            division: user.division.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn validate(&self) -> Result<UserDto, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::Required("Username"));
        }
        let password = self.password.trim();
        if password.is_empty() && !self.is_edit() {
            return Err(ValidationError::PasswordRequired);
        }
        let division = self.division.trim();
        if division.is_empty() {
            return Err(ValidationError::Required("Division"));
        }
        Ok(UserDto {
            username: username.to_string(),
            password: (!password.is_empty()).then(|| password.to_string()),
            role: self.role,
            division: division.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        UserForm {
            user_id: None,
            username: " sari ".into(),
            password: "secret".into(),
            role: Role::User,
            division: "IT Solutions".into(),
        }
    }

    #[test]
    fn test_create_requires_password() {
        let mut form = filled();
        form.password = "  ".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordRequired));
    }

    #[test]
    fn test_edit_with_blank_password_omits_it() {
        let user = User {
            id: 3,
            username: "sari".into(),
            role: "admin".into(),
            division: "IT Solutions".into(),
            ..Default::default()
        };
        let dto = UserForm::from_user(&user).validate().unwrap();
        assert_eq!(dto.password, None);
        assert_eq!(dto.role, Role::Admin);
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains(r#""role":"admin""#));
    }

    #[test]
    fn test_username_trimmed_and_required() {
        assert_eq!(filled().validate().unwrap().username, "sari");
        let mut form = filled();
        form.username = String::new();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Username is required."
        );
    }
}
