use crate::error::{Error, ExecutionError, Result};
use crate::git::remote;
use crate::runner::{CommandRunner, ExecutionContext, Invocation, RunOutput, SystemRunner};
use clap::ValueEnum;
use log::{debug, trace};
use std::ffi::OsString;
use strum::{Display, EnumString, EnumVariantNames};


const USER_NAME_KEY: &str = "user.name";
const USER_EMAIL_KEY: &str = "user.email";
const GITHUB_TOKEN_KEY: &str = "github.token";
const REMOTE_ORIGIN_URL_KEY: &str = "remote.origin.url";

// `git config --get` exits with 1 when the key is not present.
const NOT_FOUND_EXIT_CODE: i32 = 1;

/// Which layer of the configuration hierarchy a query consults.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumString,
    EnumVariantNames,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    ValueEnum,
)]
#[strum(serialize_all = "kebab_case")]
pub enum Scope {
    /// Every source git considers, including `include.path` files and the
    /// `GIT_CONFIG*` environment overrides.
    #[default]
    All,
    /// The user-level file, or `GIT_CONFIG_GLOBAL` when set.
    Global,
    /// The current repository only.
    Local,
}

impl Scope {
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Global => Some("--global"),
            Self::Local => Some("--local"),
        }
    }
}

/// Reads configuration values by running `git config --get`.
#[derive(Clone, Debug, Default)]
pub struct ConfigReader<R = SystemRunner> {
    runner: R,
    context: ExecutionContext,
}

impl ConfigReader<SystemRunner> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: ExecutionContext) -> Self {
        Self {
            runner: SystemRunner,
            context,
        }
    }
}

impl<R> ConfigReader<R>
where
    R: CommandRunner,
{
    pub fn with_runner(runner: R, context: ExecutionContext) -> Self {
        Self { runner, context }
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    pub fn query(&self, scope: Scope, key: &str) -> Result<String> {
        let invocation = Invocation::new(&self.context, config_get_args(scope, key));
        trace!("query {} {}", scope, key);

        let output = self
            .runner
            .run(&invocation)
            .map_err(|source| ExecutionError::Spawn {
                program: invocation.program_lossy(),
                source,
            })?;

        let value = interpret(&invocation, output);
        match &value {
            Ok(_) => debug!("query {} {}: found", scope, key),
            Err(err) => debug!("query {} {}: {}", scope, key, err),
        }
        value
    }

    pub fn query_all(&self, key: &str) -> Result<String> {
        self.query(Scope::All, key)
    }

    pub fn query_global(&self, key: &str) -> Result<String> {
        self.query(Scope::Global, key)
    }

    pub fn query_local(&self, key: &str) -> Result<String> {
        self.query(Scope::Local, key)
    }

    pub fn username(&self) -> Result<String> {
        self.query_all(USER_NAME_KEY)
    }

    pub fn email(&self) -> Result<String> {
        self.query_all(USER_EMAIL_KEY)
    }

    pub fn github_token(&self) -> Result<String> {
        self.query_all(GITHUB_TOKEN_KEY)
    }

    pub fn origin_url(&self) -> Result<String> {
        self.query_local(REMOTE_ORIGIN_URL_KEY)
    }

    /// The repository name taken from the last path segment of the origin
    /// remote's URL, without a `.git` suffix.
    pub fn repository_name(&self) -> Result<String> {
        let url = self.origin_url()?;
        remote::repository_name(&url)
    }
}

fn config_get_args(scope: Scope, key: &str) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["config".into(), "--get".into(), "--null".into()];
    if let Some(flag) = scope.flag() {
        args.push(flag.into());
    }
    args.push(key.into());
    args
}

fn interpret(invocation: &Invocation, output: RunOutput) -> Result<String> {
    match output.code {
        Some(0) => decode(output.stdout),
        Some(NOT_FOUND_EXIT_CODE) => Err(Error::NotFound),
        code => Err(ExecutionError::Status {
            program: invocation.program_lossy(),
            code,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        }
        .into()),
    }
}

// With `--null` the value is terminated by a single NUL instead of a
// newline, so only that byte is removed. Whitespace is part of the value.
fn decode(mut stdout: Vec<u8>) -> Result<String> {
    if stdout.last() == Some(&0) {
        stdout.pop();
    }
    let value = String::from_utf8(stdout).map_err(ExecutionError::from)?;
    Ok(value)
}
