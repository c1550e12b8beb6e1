use mongodb::bson::{oid::ObjectId, Bson, DateTime, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_ROLE: &str = "user";

/// Documento da collection "users"
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
    /// Always overwritten at signup, whatever the client sent
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<Bson>,
    #[serde(rename = "savedLessons", default)]
    pub saved_lessons: Vec<String>,
    /// Profile fields submitted at signup (name, photo...), kept verbatim
    #[serde(flatten)]
    #[schema(value_type = std::collections::HashMap<String, serde_json::Value>)]
    pub profile: Document,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl User {
    /// Applies the server-assigned signup defaults, discarding anything the
    /// client tried to set for them.
    pub fn with_signup_defaults(mut self) -> Self {
        self.id = None;
        self.role = default_role();
        self.is_premium = false;
        self.created_at = Some(Bson::DateTime(DateTime::now()));
        self.saved_lessons.clear();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_defaults_override_client_values() {
        let user: User = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com",
            "name": "Ada",
            "role": "admin",
            "isPremium": true,
            "savedLessons": ["x"]
        }))
        .unwrap();

        let user = user.with_signup_defaults();
        assert_eq!(user.role, "user");
        assert!(!user.is_premium);
        assert!(matches!(user.created_at, Some(Bson::DateTime(_))));
        assert!(user.saved_lessons.is_empty());
        assert_eq!(user.profile.get_str("name").unwrap(), "Ada");
    }

    #[test]
    fn test_client_created_at_is_replaced() {
        let user: User = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(user.created_at, Some(Bson::String("2024-01-01T00:00:00Z".into())));

        let user = user.with_signup_defaults();
        assert!(matches!(user.created_at, Some(Bson::DateTime(_))));
        assert!(!user.profile.contains_key("createdAt"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let user: User =
            serde_json::from_value(serde_json::json!({ "email": "bob@example.com" })).unwrap();
        assert_eq!(user.role, DEFAULT_ROLE);
        assert!(!user.is_premium);
        assert!(user.profile.is_empty());
    }
}
