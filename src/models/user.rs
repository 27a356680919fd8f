use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record - the sole entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Assigned by the store on creation, immutable afterwards
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: i32,
    /// Set by the service at creation time, never modified
    pub created: DateTime<Utc>,
}

/// Create payload: everything the caller supplies for a new user.
/// `id` and `created` are assigned by the store and the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default)]
    pub age: i32,
}

/// Optional fields for partial updates; absent fields stay unchanged.
/// `created` and `id` are immutable and deliberately not representable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl UserUpdate {
    /// True when no field is present; the update would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.email.is_none()
            && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_age_defaults_to_zero() {
        let user: NewUser = serde_json::from_str(
            r#"{"firstname":"John","lastname":"Doe","email":"john.doe@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.age, 0);
    }

    #[test]
    fn test_user_update_is_empty() {
        assert!(UserUpdate::default().is_empty());
        let changes = UserUpdate {
            age: Some(31),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User {
            id: 1,
            firstname: "John".into(),
            lastname: "Doe".into(),
            email: "john.doe@example.com".into(),
            age: 30,
            created: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["firstname"], "John");
        assert_eq!(json["age"], 30);
        assert!(json.get("created").is_some());
    }
}
