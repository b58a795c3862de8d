use super::Inquiry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role; drives access to the dashboard and admin areas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Agent,
    Admin,
}

text_enum!(Role, "role", {
    Client => "client",
    Agent => "agent",
    Admin => "admin",
});

/// A marketplace account, as stored in the user list and mirrored into the
/// persisted session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub saved_properties: Vec<String>,
    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn has_saved(&self, property_id: &str) -> bool {
        self.saved_properties.iter().any(|id| id == property_id)
    }

    /// Adds the property to the saved list, or removes it if already there.
    /// Returns whether the property is saved afterwards.
    pub fn toggle_saved(&mut self, property_id: &str) -> bool {
        if self.has_saved(property_id) {
            self.saved_properties.retain(|id| id != property_id);
            false
        } else {
            self.saved_properties.push(property_id.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_toggle_saved() {
        let mut user = seed::users().remove(0);
        assert_eq!(user.saved_properties, vec!["1", "3", "7"]);

        assert!(!user.toggle_saved("3"));
        assert_eq!(user.saved_properties, vec!["1", "7"]);

        assert!(user.toggle_saved("5"));
        assert!(user.has_saved("5"));
    }

    #[test]
    fn test_user_round_trips_through_session_json() {
        let user = seed::users().remove(1);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"role\":\"admin\""));
        assert!(!json.contains("phone"));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
