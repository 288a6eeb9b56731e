use anyhow::Result;
use clap::Parser;
use gopython3::{
    ApiConfig, Apis, commands,
    config::{DEFAULT_GITHUB_URL, DEFAULT_PYPI_URL},
    github::{PYTHON_3, RepoId, Topic},
    pypi::PackageQuery,
};
use std::time::Duration;

/// gopython3 - PyPI and GitHub lookups for Python 3 porting status
///
/// Every command prints JSON on stdout. Set RUST_LOG=debug to see each request.
///
/// Examples:
///   gopython3 package Django==1.5.1
///   gopython3 issues django/django
#[derive(Parser, Debug)]
#[command(author, version = env!("GOPYTHON3_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// PyPI base URL (also via GOPYTHON3_PYPI_URL)
    #[arg(
        long = "pypi-url",
        env = "GOPYTHON3_PYPI_URL",
        value_name = "URL",
        default_value = DEFAULT_PYPI_URL,
        global = true
    )]
    pub pypi_url: String,

    /// GitHub API base URL (also via GOPYTHON3_GITHUB_URL)
    #[arg(
        long = "github-url",
        env = "GOPYTHON3_GITHUB_URL",
        value_name = "URL",
        default_value = DEFAULT_GITHUB_URL,
        global = true
    )]
    pub github_url: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30, global = true)]
    pub timeout: u64,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show PyPI metadata for a package
    Package(PackageArgs),

    /// Show GitHub metadata for a repository
    Repo(RepoArgs),

    /// List open issues in a repository that mention a topic
    Issues(IssuesArgs),

    /// Find the most popular repository with the given name
    Search(SearchArgs),
}

#[derive(clap::Args, Debug)]
pub struct PackageArgs {
    /// Package name, optionally pinned as NAME==VERSION
    #[arg(value_name = "NAME[==VERSION]")]
    pub package: PackageQuery,

    /// Release to look up (overrides a pin in NAME)
    #[arg(long = "release", short = 'r', value_name = "VERSION")]
    pub version: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RepoArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: RepoId,
}

#[derive(clap::Args, Debug)]
pub struct IssuesArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: RepoId,

    /// Phrase an issue title or body must contain (case-sensitive)
    #[arg(long, default_value = PYTHON_3)]
    pub topic: String,

    /// Issues requested per page (1 to 100)
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub per_page: u32,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Repository name to search for
    pub name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = ApiConfig::default()
        .with_pypi_url(cli.pypi_url)
        .with_github_url(cli.github_url)
        .with_timeout(Duration::from_secs(cli.timeout));
    if let Commands::Issues(args) = &cli.command {
        config = config.with_per_page(args.per_page);
    }

    let apis = Apis::new(&config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Package(args) => {
            let query = match args.version {
                Some(version) => PackageQuery::new(&args.package.name, Some(&version))?,
                None => args.package,
            };
            commands::package(&apis, &query, &mut out).await?
        }
        Commands::Repo(args) => commands::repo(&apis, &args.repo, &mut out).await?,
        Commands::Issues(args) => {
            commands::issues(&apis, &args.repo, &Topic::new(args.topic), &mut out).await?
        }
        Commands::Search(args) => commands::search(&apis, &args.name, &mut out).await?,
    }
    Ok(())
}
