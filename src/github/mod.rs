//! GitHub repository, issue, and search wrappers.

mod repo;
mod search;
mod types;

use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

pub use repo::{MAX_ISSUE_PAGES, PYTHON_3, RepoInfoWrapper, Topic};
pub use search::RepoSearchWrapper;
pub use types::{Account, Issue, IssueNumber, IssueState, IssueSummary};

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(RepoId::new(parts[0], parts[1]))
        }
    }
}
