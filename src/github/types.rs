use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Open => write!(f, "open"),
            IssueState::Closed => write!(f, "closed"),
        }
    }
}

/// Issue numbers arrive as JSON numbers from GitHub, but some mirrors quote them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum IssueNumber {
    Number(u64),
    Text(String),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub login: String,
}

/// An issue as listed by `GET /repos/{owner}/{repo}/issues`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: Option<IssueNumber>,
    pub state: IssueState,
    pub title: String,
    pub body: Option<String>,
    pub html_url: Option<String>,
    pub url: Option<String>,
    #[serde(alias = "owner")]
    pub user: Option<Account>,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// The browser link when present, otherwise whatever URL the payload carries.
    pub fn link(&self) -> Option<&str> {
        self.html_url.as_deref().or(self.url.as_deref())
    }
}

/// The reduced view of an issue handed to callers.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    pub state: IssueState,
    pub title: String,
    pub url: Option<String>,
}

impl From<&Issue> for IssueSummary {
    fn from(issue: &Issue) -> Self {
        Self {
            state: issue.state,
            title: issue.title.clone(),
            url: issue.link().map(str::to_string),
        }
    }
}
