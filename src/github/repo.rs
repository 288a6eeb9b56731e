use log::{debug, warn};
use serde_json::Value;

use super::{Issue, IssueSummary, RepoId};
use crate::config::{DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, Transport, get_json};

/// Upper bound on issue pages fetched for one repository.
pub const MAX_ISSUE_PAGES: u32 = 30;

/// Phrase the canonical topic filter looks for.
pub const PYTHON_3: &str = "Python 3";

/// Matches issues whose title or body contains a phrase (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    phrase: String,
}

impl Topic {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }

    pub fn python3() -> Self {
        Self::new(PYTHON_3)
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        issue.title.contains(&self.phrase)
            || issue
                .body
                .as_deref()
                .is_some_and(|body| body.contains(&self.phrase))
    }
}

/// Repository metadata and issue lists from the GitHub REST API.
pub struct RepoInfoWrapper<T: Transport = HttpClient> {
    transport: T,
    api_url: String,
    per_page: u32,
}

impl<T: Transport> RepoInfoWrapper<T> {
    pub fn new(transport: T, api_url: &str) -> Self {
        Self {
            transport,
            api_url: api_url.trim_end_matches('/').to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Clamped to `1..=MAX_PER_PAGE`; GitHub ignores larger page sizes.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the decoded repository document unmodified.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_repo_info(&self, repo: &RepoId) -> Result<Value, ApiError> {
        let url = format!("{}/repos/{}/{}", self.api_url, repo.owner, repo.repo);
        debug!("Fetching repo info from {}...", url);
        get_json(&self.transport, &HttpRequest::new(url)).await
    }

    /// Open issues accepted by `topic_filter`, across all pages, in listing order.
    #[tracing::instrument(skip(self, topic_filter))]
    pub async fn fetch_topic_issues<F>(
        &self,
        repo: &RepoId,
        topic_filter: F,
    ) -> Result<Vec<IssueSummary>, ApiError>
    where
        F: Fn(&Issue) -> bool,
    {
        let issues = self.fetch_issues(repo).await?;
        let total = issues.len();

        let summaries: Vec<IssueSummary> = issues
            .iter()
            .filter(|&issue| issue.is_open() && topic_filter(issue))
            .map(IssueSummary::from)
            .collect();

        debug!(
            "{} of {} issues in {} matched the topic filter",
            summaries.len(),
            total,
            repo
        );

        Ok(summaries)
    }

    /// Open issues mentioning "Python 3".
    pub async fn fetch_py3_issues(&self, repo: &RepoId) -> Result<Vec<IssueSummary>, ApiError> {
        let topic = Topic::python3();
        self.fetch_topic_issues(repo, |issue| topic.matches(issue))
            .await
    }

    /// Walks `?per_page=N&page=K` until an empty page.
    ///
    /// A page holding fewer than `per_page` items does not end the walk; the
    /// upstream may serve smaller pages than requested.
    async fn fetch_issues(&self, repo: &RepoId) -> Result<Vec<Issue>, ApiError> {
        let url = format!("{}/repos/{}/{}/issues", self.api_url, repo.owner, repo.repo);
        let mut issues = Vec::new();

        for page in 1..=MAX_ISSUE_PAGES {
            debug!("Fetching issues page {} from {}...", page, url);

            let request = HttpRequest::new(url.as_str())
                .query("per_page", self.per_page.to_string())
                .query("page", page.to_string());

            let parsed: Vec<Issue> = get_json(&self.transport, &request).await?;
            if parsed.is_empty() {
                return Ok(issues);
            }
            issues.extend(parsed);
        }

        warn!(
            "Stopped listing issues for {} after {} pages",
            repo, MAX_ISSUE_PAGES
        );
        Ok(issues)
    }
}
