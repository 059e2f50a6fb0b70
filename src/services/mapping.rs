//! Field remapping between Trypod wire records and the host model.

use crate::models::host::{self, Build, BuildEvent, DEFAULT_BRANCH};
use crate::models::trypod;

pub fn to_user(reply: trypod::User) -> host::User {
    host::User {
        login: reply.username,
        token: reply.token,
        email: reply.address,
    }
}

/// Repository records carry no branch, so the default marker is always used.
pub fn to_repo(reply: trypod::Repo) -> host::Repo {
    host::Repo {
        full_name: host::Repo::full_name_of(&reply.owner, &reply.name),
        owner: reply.owner,
        name: reply.name,
        link: reply.url.clone(),
        clone: reply.url,
        branch: DEFAULT_BRANCH.to_string(),
    }
}

pub fn to_repos(reply: Vec<trypod::Repo>) -> Vec<host::Repo> {
    reply.into_iter().map(to_repo).collect()
}

/// Maps a webhook commit onto the repository it belongs to and the build it
/// triggers. The payload has no email field, so the author name fills both.
pub fn to_hook(commit: trypod::Commit) -> (host::Repo, Build) {
    let repo = host::Repo {
        full_name: host::Repo::full_name_of(&commit.owner, &commit.name),
        owner: commit.owner,
        name: commit.name,
        link: commit.repository.clone(),
        clone: commit.repository,
        branch: commit.branch.clone(),
    };

    let build = Build {
        event: BuildEvent::Push,
        status: String::new(),
        branch: commit.branch,
        commit: commit.rev.clone(),
        ref_name: commit.rev,
        message: commit.description,
        author: commit.author.clone(),
        email: commit.author,
    };

    (repo, build)
}

pub fn to_status(repo: &host::Repo, build: &Build, link: &str) -> trypod::Status {
    trypod::Status {
        url: link.to_string(),
        repository: repo.name.clone(),
        status: build.status.clone(),
        branch: build.branch.clone(),
        rev: build.commit.clone(),
        author: build.author.clone(),
        email: build.email.clone(),
        message: build.message.clone(),
        event: build.event.as_str().to_string(),
    }
}
