mod commands;
mod config;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stringsync::{RepoCatalog, RepoIdentity, StringsRepo, XmlStrings};
use stringsync_github::{GitHubClient, GitHubClientConfig};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "stringsync")]
#[command(about = "Sync Android strings.xml translations from GitHub repositories")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a repository for strings.xml files and download them
    Sync {
        /// Repository in <owner>/<repo> form
        repo: String,
        /// Re-download locales even if they were edited locally
        #[arg(long)]
        overwrite: bool,
    },
    /// List, add, or remove cached locales for a repository
    Locales {
        /// Repository in <owner>/<repo> form
        repo: String,
        /// Create an empty resource file for this locale tag
        #[arg(long, value_name = "TAG")]
        add: Option<String>,
        /// Delete the resource file for this locale tag
        #[arg(long, value_name = "TAG")]
        remove: Option<String>,
    },
    /// List every cached repository
    Repos,
    /// Remove a repository from the local cache
    Delete {
        /// Repository in <owner>/<repo> form
        repo: String,
    },
}

fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok()
}

fn build_repo(config: &AppConfig, repo: &str) -> Result<StringsRepo> {
    let identity: RepoIdentity = repo.parse()?;
    let cache_root = config.cache_root()?;

    let client = Arc::new(GitHubClient::new(GitHubClientConfig {
        token: github_token(),
        branch: config.branch.clone().unwrap_or_else(|| "master".into()),
        ..Default::default()
    }));

    Ok(StringsRepo::new(
        &cache_root,
        identity,
        Arc::new(XmlStrings),
        client.clone(),
        client,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config();

    match cli.command {
        Command::Sync { repo, overwrite } => {
            commands::sync::run(build_repo(&config, &repo)?, overwrite).await
        }
        Command::Locales { repo, add, remove } => {
            commands::locales::run(build_repo(&config, &repo)?, add.as_deref(), remove.as_deref())
        }
        Command::Repos => commands::repos::run(&RepoCatalog::new(config.cache_root()?)),
        Command::Delete { repo } => commands::delete::run(build_repo(&config, &repo)?),
    }
}
