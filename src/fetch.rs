//! Blocking GitHub API client used by the command line entry point.
//! One user document plus one page of owned repositories is enough for
//! every card; callers fall back to a zeroed snapshot when this fails.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Result, StatboardError};
use crate::stats::ProfileStats;

const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("statboard/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
    name: Option<String>,
    bio: Option<String>,
    public_repos: u64,
    followers: u64,
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    stargazers_count: u64,
    forks_count: u64,
    language: Option<String>,
}

pub struct ProfileClient {
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl ProfileClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, token })
    }

    pub fn fetch_profile(&self, login: &str) -> Result<(ProfileStats, Vec<Option<String>>)> {
        let not_found = |err| match err {
            StatboardError::NotFound(_) => StatboardError::NotFound(login.to_string()),
            other => other,
        };
        let user: UserResponse = self
            .fetch_json(&format!("{API_BASE_URL}/users/{login}"))
            .map_err(not_found)?;
        let repos: Vec<RepoResponse> = self
            .fetch_json(&format!(
                "{API_BASE_URL}/users/{login}/repos?per_page=100&type=owner"
            ))
            .map_err(not_found)?;
        Ok(fold_profile(login, user, repos))
    }

    fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "requesting");
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = request.send()?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StatboardError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(StatboardError::Api(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn fold_profile(
    login: &str,
    user: UserResponse,
    repos: Vec<RepoResponse>,
) -> (ProfileStats, Vec<Option<String>>) {
    let mut stats = ProfileStats::zeroed(login);
    stats.login = user.login;
    stats.display_name = user.name.unwrap_or_else(|| stats.login.clone());
    stats.bio = user.bio.unwrap_or_default();
    stats.public_repos = user.public_repos;
    stats.followers = user.followers;
    for repo in &repos {
        stats.total_stars += repo.stargazers_count;
        stats.total_forks += repo.forks_count;
    }
    let labels = repos.into_iter().map(|repo| repo.language).collect();
    (stats, labels)
}

pub fn load_avatar(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}
