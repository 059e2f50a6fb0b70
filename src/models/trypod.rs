//! Wire formats spoken by the Trypod backend.

use serde::{Deserialize, Serialize};

/// Account record returned by `POST /login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub realname: String,
    pub address: String,
    pub token: String,
    pub avatar: String,
}

/// Repository record returned by `GET /repo/{name}` and `GET /repos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Repo {
    pub name: String,
    pub url: String,
    pub owner: String,
}

/// Webhook payload posted by the backend on every new commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub author: String,
    pub avatar: String,
    pub repository: String,
    pub owner: String,
    pub name: String,
    pub rev: String,
    pub branch: String,
    pub description: String,
}

/// Commit-status report sent to `POST /status/{token}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub url: String,
    pub repository: String,
    pub status: String,
    pub branch: String,
    pub rev: String,
    pub author: String,
    pub email: String,
    pub message: String,
    pub event: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ignores_unknown_and_missing_fields() {
        let user: User =
            serde_json::from_str(r#"{"username":"alice","token":"t0k","extra":true}"#).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.token, "t0k");
        assert_eq!(user.address, "");
        assert_eq!(user.id, 0);
    }

    #[test]
    fn test_status_serializes_all_fields() {
        let status = Status {
            url: "http://ci/o/r/1".to_string(),
            repository: "r".to_string(),
            status: "success".to_string(),
            branch: "main".to_string(),
            rev: "abc123".to_string(),
            author: "alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "msg".to_string(),
            event: "push".to_string(),
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["url"], "http://ci/o/r/1");
        assert_eq!(value["rev"], "abc123");
        assert_eq!(value["event"], "push");
        assert_eq!(value.as_object().unwrap().len(), 9);
    }
}
