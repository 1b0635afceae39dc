//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shared task (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    /// Owner of the task
    pub user_id: String,
    pub partner_id: Option<String>,
    pub group_id: Option<String>,
    pub content: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Partner the current user shares tasks with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Partner {
    /// Username, or the email when no username was set
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Result of `create_todo` / `toggle_todo_completion`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoMutation {
    #[serde(default)]
    pub todo: Option<Todo>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of `delete_todo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_missing_fields_default_to_none() {
        let parsed: TodoMutation = serde_json::from_str(r#"{"error":"quota exceeded"}"#).unwrap();
        assert_eq!(parsed.todo, None);
        assert_eq!(parsed.error.as_deref(), Some("quota exceeded"));

        let parsed: DeleteOutcome = serde_json::from_str("{}").unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error, None);
    }

    #[test]
    fn test_todo_from_backend_json() {
        let json = r#"{
            "id": "t1",
            "user_id": "u1",
            "partner_id": "p1",
            "group_id": null,
            "content": "Buy milk",
            "completed": false,
            "created_at": "2024-03-01T10:00:00Z"
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.partner_id.as_deref(), Some("p1"));
        assert_eq!(todo.group_id, None);
        assert_eq!(todo.created_at.format("%Y-%m-%d").to_string(), "2024-03-01");
    }

    #[test]
    fn test_partner_display_name_falls_back_to_email() {
        let mut partner = Partner {
            id: "p1".to_string(),
            email: "sam@example.com".to_string(),
            username: "sam".to_string(),
            avatar_url: None,
        };
        assert_eq!(partner.display_name(), "sam");
        partner.username = "  ".to_string();
        assert_eq!(partner.display_name(), "sam@example.com");
    }
}
