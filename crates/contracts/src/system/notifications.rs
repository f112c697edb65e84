use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        let list: Vec<Notification> = serde_json::from_str(
            r#"[{"id":1,"title":"New job order","is_read":false},
                {"id":2,"title":"Payment posted","is_read":true},
                {"id":3,"title":"Reconnection request"}]"#,
        )
        .unwrap();
        assert_eq!(unread_count(&list), 2);
    }
}
