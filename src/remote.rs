//! The capability contract the CI host drives a source-control backend through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::host::{Build, Netrc, Perm, Repo, Team, User};

/// Where the host sends a user whose login form was incomplete.
pub const LOGIN_FORM_PATH: &str = "/login/form";

/// Credentials submitted to the host's login endpoint. Absent fields are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(User),
    /// Credentials were missing; the host should redirect to `location`.
    Redirect { location: &'static str },
}

/// A source-control backend as seen by the CI host.
///
/// Every method is a single stateless exchange with the backend; there is no
/// retry and no local recovery.
#[async_trait]
pub trait Remote: Send + Sync {
    /// Authenticates the submitted credentials against the backend.
    async fn login(&self, form: &LoginForm) -> Result<LoginOutcome>;

    /// Exchanges an access token for a login name.
    async fn auth(&self, token: &str, secret: &str) -> Result<String>;

    async fn teams(&self, user: &User) -> Result<Vec<Team>>;

    async fn team_perm(&self, user: &User, org: &str) -> Result<Option<Perm>>;

    async fn repo(&self, user: &User, owner: &str, name: &str) -> Result<Repo>;

    async fn repos(&self, user: &User) -> Result<Vec<Repo>>;

    async fn perm(&self, user: &User, owner: &str, name: &str) -> Result<Perm>;

    /// Fetches `path` at the commit a build resolved to.
    async fn file(&self, user: &User, repo: &Repo, build: &Build, path: &str) -> Result<Vec<u8>>;

    /// Fetches `path` at an arbitrary ref.
    async fn file_ref(
        &self,
        user: &User,
        repo: &Repo,
        ref_name: &str,
        path: &str,
    ) -> Result<Vec<u8>>;

    /// Reports the outcome of `build`; `link` points back at the build page.
    async fn status(&self, user: &User, repo: &Repo, build: &Build, link: &str) -> Result<()>;

    async fn netrc(&self, user: &User, repo: &Repo) -> Result<Netrc>;

    /// Registers `link` as the repository's webhook callback.
    async fn activate(&self, user: &User, repo: &Repo, link: &str) -> Result<()>;

    async fn deactivate(&self, user: &User, repo: &Repo, link: &str) -> Result<()>;

    /// Parses an inbound webhook body into the repository and build it describes.
    async fn hook(&self, body: &[u8]) -> Result<(Repo, Build)>;
}
