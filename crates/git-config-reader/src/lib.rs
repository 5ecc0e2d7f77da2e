#![deny(rust_2018_idioms)]

//! Read values from git's layered configuration by running `git config`.
//!
//! Resolution across the system, global and repository files, `include.path`
//! directives and the `GIT_CONFIG*` environment overrides is left to git
//! itself.
//!
//! ```no_run
//! match git_config_reader::global("user.name") {
//!     Ok(name) => println!("{}", name),
//!     Err(err) if err.is_not_found() => println!("user.name is not set"),
//!     Err(err) => eprintln!("{}", err),
//! }
//! ```
//!
//! Use [`ConfigReader`] with an [`ExecutionContext`] to query a specific
//! repository or an isolated environment.

pub mod error;
pub mod git;
pub mod runner;

pub use error::{Error, ExecutionError, OptionalExt, Result};
pub use git::config::{ConfigReader, Scope};
pub use git::remote::RemoteUrl;
pub use runner::{CommandRunner, ExecutionContext, Invocation, RunOutput, SystemRunner};

/// Every source git considers, including includes and the environment
/// override.
pub fn all(key: &str) -> Result<String> {
    ConfigReader::new().query_all(key)
}

/// The user-level file or `GIT_CONFIG_GLOBAL`.
pub fn global(key: &str) -> Result<String> {
    ConfigReader::new().query_global(key)
}

/// The repository in the current working directory.
pub fn local(key: &str) -> Result<String> {
    ConfigReader::new().query_local(key)
}

pub fn username() -> Result<String> {
    ConfigReader::new().username()
}

pub fn email() -> Result<String> {
    ConfigReader::new().email()
}

pub fn github_token() -> Result<String> {
    ConfigReader::new().github_token()
}

pub fn origin_url() -> Result<String> {
    ConfigReader::new().origin_url()
}

pub fn repository() -> Result<String> {
    ConfigReader::new().repository_name()
}
