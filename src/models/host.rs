//! Domain model of the CI host. The adapter only produces and consumes these
//! values; it never stores them.

use serde::{Deserialize, Serialize};

/// Branch reported for every repository fetched from the backend, which does
/// not expose branch names on repository records.
pub const DEFAULT_BRANCH: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub token: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub owner: String,
    pub name: String,
    pub full_name: String,
    pub link: String,
    pub clone: String,
    pub branch: String,
}

impl Repo {
    pub fn full_name_of(owner: &str, name: &str) -> String {
        format!("{}/{}", owner, name)
    }
}

/// What triggered a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildEvent {
    #[default]
    Push,
    PullRequest,
    Tag,
    Deployment,
}

impl BuildEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildEvent::Push => "push",
            BuildEvent::PullRequest => "pull_request",
            BuildEvent::Tag => "tag",
            BuildEvent::Deployment => "deployment",
        }
    }
}

impl std::fmt::Display for BuildEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub event: BuildEvent,
    pub status: String,
    pub branch: String,
    pub commit: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub message: String,
    pub author: String,
    pub email: String,
}

/// Access a user holds on a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perm {
    pub admin: bool,
    pub pull: bool,
    pub push: bool,
}

impl Perm {
    pub fn full() -> Self {
        Perm {
            admin: true,
            pull: true,
            push: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub login: String,
    pub avatar: String,
}

/// Clone credentials handed to build agents. `Default` is the empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Netrc {
    pub machine: String,
    pub login: String,
    pub password: String,
}
