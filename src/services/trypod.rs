use async_trait::async_trait;
use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Opts;
use crate::error::{RemoteError, Result};
use crate::models::host::{Build, Netrc, Perm, Repo, Team, User};
use crate::models::trypod;
use crate::remote::{LOGIN_FORM_PATH, LoginForm, LoginOutcome, Remote};
use crate::services::mapping;

/// [`Remote`] implementation backed by the Trypod HTTP API.
///
/// Holds nothing but the immutable base URL and token; every call is one
/// request whose response is fully consumed before returning.
#[derive(Debug, Clone)]
pub struct TrypodClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TrypodClient {
    pub fn new(opts: Opts) -> Result<Self> {
        if opts.url.is_empty() {
            return Err(RemoteError::Config("base url is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("trypod-remote"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: opts.url.trim_end_matches('/').to_string(),
            token: opts.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn raw_file_url(&self, repo: &Repo, ref_name: &str, path: &str) -> String {
        self.url(&format!("/repo/{}/raw-file/{}/{}", repo.name, ref_name, path))
    }

    /// Token-free rendering of `url` for log lines.
    fn redact(&self, url: &str) -> String {
        if self.token.is_empty() {
            url.to_string()
        } else {
            url.replace(&self.token, "***")
        }
    }

    /// Passes `response` through when it carries `expected`; otherwise drains
    /// the body so the connection goes back to the pool.
    async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
        let status = response.status();
        if status != expected {
            let _ = response.bytes().await;
            return Err(RemoteError::backend(status));
        }
        Ok(response)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let response = Self::expect_status(response, StatusCode::OK).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_text(&self, url: &str, body: String) -> Result<()> {
        debug!("POST {}", self.redact(url));
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;
        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

#[async_trait]
impl Remote for TrypodClient {
    async fn login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        if !form.is_complete() {
            return Ok(LoginOutcome::Redirect {
                location: LOGIN_FORM_PATH,
            });
        }

        let url = self.url("/login");
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("username", form.username.as_str()),
                ("password", form.password.as_str()),
            ])
            .send()
            .await?;
        let response = Self::expect_status(response, StatusCode::OK).await?;
        let body = response.bytes().await?;

        let reply: trypod::User = serde_json::from_slice(&body)?;
        Ok(LoginOutcome::Authenticated(mapping::to_user(reply)))
    }

    async fn auth(&self, _token: &str, _secret: &str) -> Result<String> {
        Err(RemoteError::NotImplemented("auth"))
    }

    async fn teams(&self, _user: &User) -> Result<Vec<Team>> {
        Ok(Vec::new())
    }

    async fn team_perm(&self, _user: &User, _org: &str) -> Result<Option<Perm>> {
        Ok(None)
    }

    // Trypod addresses repositories by name alone.
    async fn repo(&self, _user: &User, _owner: &str, name: &str) -> Result<Repo> {
        let reply: trypod::Repo = self.get_json(&self.url(&format!("/repo/{}", name))).await?;
        Ok(mapping::to_repo(reply))
    }

    async fn repos(&self, _user: &User) -> Result<Vec<Repo>> {
        let reply: Vec<trypod::Repo> = self.get_json(&self.url("/repos")).await?;
        Ok(mapping::to_repos(reply))
    }

    async fn perm(&self, _user: &User, _owner: &str, _name: &str) -> Result<Perm> {
        Ok(Perm::full())
    }

    async fn file(&self, _user: &User, repo: &Repo, build: &Build, path: &str) -> Result<Vec<u8>> {
        self.get_bytes(&self.raw_file_url(repo, &build.commit, path)).await
    }

    async fn file_ref(
        &self,
        _user: &User,
        repo: &Repo,
        ref_name: &str,
        path: &str,
    ) -> Result<Vec<u8>> {
        self.get_bytes(&self.raw_file_url(repo, ref_name, path)).await
    }

    async fn status(&self, _user: &User, repo: &Repo, build: &Build, link: &str) -> Result<()> {
        let url = self.url(&format!("/status/{}", self.token));
        let payload = serde_json::to_vec(&mapping::to_status(repo, build, link))?;

        debug!("POST {}", self.redact(&url));
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    async fn netrc(&self, _user: &User, _repo: &Repo) -> Result<Netrc> {
        Ok(Netrc::default())
    }

    async fn activate(&self, _user: &User, repo: &Repo, link: &str) -> Result<()> {
        let url = self.url(&format!("/repo/{}/activate/{}", repo.name, self.token));
        self.post_text(&url, link.to_string()).await
    }

    // Deactivation is unconditional; the callback link is not sent.
    async fn deactivate(&self, _user: &User, repo: &Repo, _link: &str) -> Result<()> {
        let url = self.url(&format!("/repo/{}/deactivate/{}", repo.name, self.token));
        self.post_text(&url, String::new()).await
    }

    async fn hook(&self, body: &[u8]) -> Result<(Repo, Build)> {
        let commit: trypod::Commit = serde_json::from_slice(body)?;
        Ok(mapping::to_hook(commit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str, token: &str) -> TrypodClient {
        TrypodClient::new(Opts {
            url: url.to_string(),
            token: token.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_empty_url_is_a_config_error() {
        let err = TrypodClient::new(Opts::default()).unwrap_err();
        assert!(matches!(err, RemoteError::Config(_)));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let c = client("http://trypod.local/", "tok");
        assert_eq!(c.base_url(), "http://trypod.local");
        assert_eq!(c.url("/repos"), "http://trypod.local/repos");
    }

    #[test]
    fn test_raw_file_url_keeps_nested_path() {
        let c = client("http://trypod.local", "tok");
        let repo = Repo {
            name: "r".to_string(),
            ..Default::default()
        };
        assert_eq!(
            c.raw_file_url(&repo, "abc123", "ci/.drone.yml"),
            "http://trypod.local/repo/r/raw-file/abc123/ci/.drone.yml"
        );
    }

    #[test]
    fn test_redact_hides_token() {
        let c = client("http://trypod.local", "s3cret");
        assert_eq!(
            c.redact("http://trypod.local/status/s3cret"),
            "http://trypod.local/status/***"
        );
        let c = client("http://trypod.local", "");
        assert_eq!(c.redact("http://trypod.local/status/"), "http://trypod.local/status/");
    }

    #[tokio::test]
    async fn test_static_capabilities() {
        let c = client("http://127.0.0.1:9", "tok");
        let user = User::default();
        let repo = Repo::default();

        assert_eq!(c.perm(&user, "any", "thing").await.unwrap(), Perm::full());
        assert!(c.teams(&user).await.unwrap().is_empty());
        assert_eq!(c.team_perm(&user, "org").await.unwrap(), None);
        assert_eq!(c.netrc(&user, &repo).await.unwrap(), Netrc::default());

        let err = c.auth("token", "secret").await.unwrap_err();
        assert!(matches!(err, RemoteError::NotImplemented(_)));
    }

    #[tokio::test]
    async fn test_hook_rejects_malformed_body() {
        let c = client("http://127.0.0.1:9", "tok");
        let err = c.hook(b"{not json").await.unwrap_err();
        assert!(err.is_decode());
    }
}
