//! Command handlers behind the `gopython3` binary.
//!
//! Each handler runs exactly one wrapper call and writes the result to `out`
//! as pretty-printed JSON.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde_json::json;

use crate::{
    config::Apis,
    github::{RepoId, Topic},
    pypi::PackageQuery,
};

pub async fn package<W: Write>(apis: &Apis, query: &PackageQuery, out: &mut W) -> Result<()> {
    info!("Looking up {} on PyPI", query);
    let info = apis
        .pypi
        .fetch(query)
        .await
        .with_context(|| format!("Failed to fetch package info for {}", query))?;
    write_json(out, &info)
}

pub async fn repo<W: Write>(apis: &Apis, repo: &RepoId, out: &mut W) -> Result<()> {
    info!("Looking up {} on GitHub", repo);
    let info = apis
        .repos
        .fetch_repo_info(repo)
        .await
        .with_context(|| format!("Failed to fetch repository info for {}", repo))?;
    write_json(out, &info)
}

pub async fn issues<W: Write>(
    apis: &Apis,
    repo: &RepoId,
    topic: &Topic,
    out: &mut W,
) -> Result<()> {
    info!("Listing open issues in {} about '{}'", repo, topic.phrase());
    let issues = apis
        .repos
        .fetch_topic_issues(repo, |issue| topic.matches(issue))
        .await
        .with_context(|| format!("Failed to list issues for {}", repo))?;
    write_json(out, &issues)
}

pub async fn search<W: Write>(apis: &Apis, name: &str, out: &mut W) -> Result<()> {
    info!("Searching GitHub for repositories named {}", name);
    let (owner, repo) = apis
        .search
        .find_most_popular_repo(name)
        .await
        .with_context(|| format!("Failed to find a repository named {}", name))?;
    write_json(out, &json!({ "owner": owner, "repo": repo }))
}

fn write_json<W: Write, S: Serialize + ?Sized>(out: &mut W, value: &S) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize output")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}
