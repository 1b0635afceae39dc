//! List View Helpers
//!
//! Pure functions that turn loaded data into what the list renders.

use crate::models::{Group, Partner, Todo};

/// Label shown next to a task
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowLabel {
    Group(String),
    Partner { name: String, avatar_url: Option<String> },
}

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRowView {
    pub todo: Todo,
    pub label: Option<RowLabel>,
}

/// Tasks visible when scoped to a partner.
///
/// A task belongs to the partner when it was shared with them or created by them.
pub fn scoped_todos(todos: &[Todo], partner_id: Option<&str>) -> Vec<Todo> {
    match partner_id {
        Some(partner_id) => todos
            .iter()
            .filter(|todo| todo.partner_id.as_deref() == Some(partner_id) || todo.user_id == partner_id)
            .cloned()
            .collect(),
        None => todos.to_vec(),
    }
}

/// Resolve the label for a task; a known group wins over a known partner.
pub fn row_label(todo: &Todo, partners: &[Partner], groups: &[Group]) -> Option<RowLabel> {
    let group = todo
        .group_id
        .as_deref()
        .and_then(|group_id| groups.iter().find(|group| group.id == group_id));
    if let Some(group) = group {
        return Some(RowLabel::Group(group.name.clone()));
    }

    todo.partner_id
        .as_deref()
        .and_then(|partner_id| partners.iter().find(|partner| partner.id == partner_id))
        .map(|partner| RowLabel::Partner {
            name: partner.display_name().to_string(),
            avatar_url: partner.avatar_url.clone(),
        })
}

/// Rows in received order, cut to `max_items` when set
pub fn build_rows(todos: &[Todo], partners: &[Partner], groups: &[Group], max_items: Option<usize>) -> Vec<TodoRowView> {
    let limit = max_items.unwrap_or(todos.len());
    todos
        .iter()
        .take(limit)
        .map(|todo| TodoRowView {
            todo: todo.clone(),
            label: row_label(todo, partners, groups),
        })
        .collect()
}

/// Content to submit for a draft, `None` when it is blank
pub fn submitted_content(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Arguments for the toggle callback: the task id and the flipped flag
pub fn toggle_request(todo: &Todo) -> (String, bool) {
    (todo.id.clone(), !todo.completed)
}

pub const LOADING_LINE: &str = "Loading tasks...";
pub const EMPTY_LINE: &str = "No tasks yet. Add one above.";

/// Status line shown above the rows. Rows stay rendered while loading.
pub fn status_line(loading: bool, empty: bool) -> Option<&'static str> {
    if loading {
        Some(LOADING_LINE)
    } else if empty {
        Some(EMPTY_LINE)
    } else {
        None
    }
}

/// "3 tasks, 1 completed"
pub fn summary(todos: &[Todo]) -> String {
    let completed = todos.iter().filter(|todo| todo.completed).count();
    let noun = if todos.len() == 1 { "task" } else { "tasks" };
    format!("{} {}, {} completed", todos.len(), noun, completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{make_partner, make_todo};

    fn group(id: &str, name: &str) -> Group {
        Group { id: id.to_string(), name: name.to_string() }
    }

    #[test]
    fn test_scoped_todos_matches_partner_or_owner() {
        let todos = vec![
            make_todo("1", "me", Some("p1"), false),
            make_todo("2", "me", Some("p2"), true),
            make_todo("3", "p1", Some("me"), false),
        ];

        let ids: Vec<_> = scoped_todos(&todos, Some("p1")).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(scoped_todos(&todos, None).len(), 3);
    }

    #[test]
    fn test_scoped_todos_two_partner_scenario() {
        let todos = vec![make_todo("1", "me", Some("p1"), false), make_todo("2", "me", Some("p2"), true)];
        let visible = scoped_todos(&todos, Some("p1"));
        assert_eq!(visible, vec![todos[0].clone()]);
    }

    #[test]
    fn test_build_rows_takes_first_items_in_order() {
        let todos: Vec<_> = ["c", "a", "b", "d"].iter().map(|id| make_todo(id, "me", None, false)).collect();

        let rows = build_rows(&todos, &[], &[], Some(2));
        let ids: Vec<_> = rows.iter().map(|r| r.todo.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);

        assert_eq!(build_rows(&todos, &[], &[], None).len(), 4);
        assert_eq!(build_rows(&todos, &[], &[], Some(10)).len(), 4);
        assert!(build_rows(&todos, &[], &[], Some(0)).is_empty());
    }

    #[test]
    fn test_group_label_suppresses_partner() {
        let mut todo = make_todo("1", "me", Some("p1"), false);
        todo.group_id = Some("g1".to_string());
        let partners = vec![make_partner("p1")];
        let groups = vec![group("g1", "Family")];

        assert_eq!(row_label(&todo, &partners, &groups), Some(RowLabel::Group("Family".to_string())));
    }

    #[test]
    fn test_unresolved_ids_have_no_label() {
        let mut todo = make_todo("1", "me", Some("ghost"), false);
        todo.group_id = Some("missing".to_string());
        assert_eq!(row_label(&todo, &[make_partner("p1")], &[group("g1", "Family")]), None);
    }

    #[test]
    fn test_partner_label_when_group_unknown() {
        let mut todo = make_todo("1", "me", Some("p1"), false);
        todo.group_id = Some("missing".to_string());
        let label = row_label(&todo, &[make_partner("p1")], &[]);
        assert_eq!(
            label,
            Some(RowLabel::Partner { name: "user-p1".to_string(), avatar_url: None })
        );
    }

    #[test]
    fn test_submitted_content_trims() {
        assert_eq!(submitted_content("  water plants \n"), Some("water plants".to_string()));
        assert_eq!(submitted_content("   \t "), None);
        assert_eq!(submitted_content(""), None);
    }

    #[test]
    fn test_toggle_request_negates_flag() {
        assert_eq!(toggle_request(&make_todo("1", "me", None, false)), ("1".to_string(), true));
        assert_eq!(toggle_request(&make_todo("2", "me", None, true)), ("2".to_string(), false));
    }

    #[test]
    fn test_summary() {
        let todos = vec![make_todo("1", "me", None, true), make_todo("2", "me", None, false)];
        assert_eq!(summary(&todos), "2 tasks, 1 completed");
        assert_eq!(summary(&todos[..1]), "1 task, 1 completed");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(true, false), Some(LOADING_LINE));
        assert_eq!(status_line(true, true), Some(LOADING_LINE));
        assert_eq!(status_line(false, true), Some(EMPTY_LINE));
        assert_eq!(status_line(false, false), None);
    }
}
