use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Matcher, Server};
use predicates::prelude::*;

fn gopython3(server_url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("gopython3"));
    cmd.env_remove("RUST_LOG")
        .arg("--pypi-url")
        .arg(server_url)
        .arg("--github-url")
        .arg(server_url);
    cmd
}

#[test]
fn test_package_prints_metadata() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/pypi/Django/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"info": {"author": "Django Software Foundation", "version": "1.5.4"}}"#)
        .create();

    gopython3(&server.url())
        .arg("package")
        .arg("Django")
        .assert()
        .success()
        .stdout(predicate::str::contains("Django Software Foundation"))
        .stdout(predicate::str::contains("1.5.4"));
}

#[test]
fn test_package_release_flag_overrides_pin() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/pypi/Django/1.5.1/json")
        .with_status(200)
        .with_body(r#"{"info": {"version": "1.5.1"}}"#)
        .create();

    gopython3(&server.url())
        .args(["package", "Django==1.4", "--release", "1.5.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.5.1"));

    mock.assert();
}

#[test]
fn test_repo_prints_metadata() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/repos/django/django")
        .with_status(200)
        .with_body(
            r#"{"html_url": "https://github.com/django/django", "updated_at": "2013-09-28T08:25:15Z"}"#,
        )
        .create();

    gopython3(&server.url())
        .args(["repo", "django/django"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://github.com/django/django"))
        .stdout(predicate::str::contains("2013-09-28T08:25:15Z"));
}

#[test]
fn test_issues_across_pages() {
    let mut server = Server::new();

    let _page1 = server
        .mock("GET", "/repos/django/django/issues?per_page=1&page=1")
        .with_status(200)
        .with_body(
            r#"[{"number": "123", "html_url": "gh.com/issue/123", "state": "closed", "title": "UnicodeError", "body": "sometext", "owner": {"login": "dummy"}}]"#,
        )
        .create();

    let _page2 = server
        .mock("GET", "/repos/django/django/issues?per_page=1&page=2")
        .with_status(200)
        .with_body(
            r#"[{"number": "456", "html_url": "gh.com/issue/456", "state": "open", "title": "Python 3 support", "body": "sometext", "owner": {"login": "py3lover"}}]"#,
        )
        .create();

    let _page3 = server
        .mock("GET", "/repos/django/django/issues?per_page=1&page=3")
        .with_status(200)
        .with_body("[]")
        .create();

    gopython3(&server.url())
        .args(["issues", "django/django", "--per-page", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gh.com/issue/456"))
        .stdout(predicate::str::contains("Python 3 support"))
        .stdout(predicate::str::contains("UnicodeError").not());
}

#[test]
fn test_search_prints_most_popular_owner() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::UrlEncoded("q".into(), "django".into()))
        .with_status(200)
        .with_body(
            r#"{"items": [{"name": "django", "owner": {"login": "django"}}, {"name": "django-cms", "owner": {"login": "divio"}}, {"name": "django", "owner": {"login": "fc"}}]}"#,
        )
        .create();

    gopython3(&server.url())
        .args(["search", "django"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""owner": "django""#))
        .stdout(predicate::str::contains("\"fc\"").not());
}

#[test]
fn test_search_without_results_fails() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create();

    gopython3(&server.url())
        .args(["search", "nothing-here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_upstream_body_fails() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/pypi/Django/json")
        .with_status(200)
        .with_body("{\"info\": ")
        .create();

    gopython3(&server.url())
        .args(["package", "Django"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed JSON"));
}

#[test]
fn test_invalid_repo_argument_fails() {
    Command::new(cargo::cargo_bin!("gopython3"))
        .args(["repo", "django"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner/repo"));
}
