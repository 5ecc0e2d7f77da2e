use clap::{Parser, Subcommand};
use git_config_reader::Scope;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about, version)]
pub struct Args {
    /// Run as if git was started in <DIR>
    #[arg(short = 'C', value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// The git executable to run
    #[arg(long, value_name = "PROGRAM", default_value = "git", global = true)]
    pub git: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Eq, PartialEq, Subcommand)]
pub enum Commands {
    /// Print the value of a key
    Get {
        key: String,

        #[arg(long, value_enum, default_value_t = Scope::All)]
        scope: Scope,
    },
    /// Print user.name
    Username,
    /// Print user.email
    Email,
    /// Print github.token
    GithubToken,
    /// Print the repository's remote.origin.url
    OriginUrl,
    /// Print the repository name taken from remote.origin.url
    Repository,
}
