use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const DEFAULT_PROGRAM: &str = "git";

/// Where and how `git` is run for a query.
///
/// The default runs `git` from `PATH` in the current working directory with
/// the inherited environment. Overrides only ever reach the child process;
/// the host process environment is left untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionContext {
    program: OsString,
    current_dir: Option<PathBuf>,
    envs: Vec<(OsString, Option<OsString>)>,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            current_dir: None,
            envs: Vec::new(),
        }
    }
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), Some(value.into())));
        self
    }

    pub fn env_remove(mut self, key: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), None));
        self
    }

    pub fn get_program(&self) -> &OsStr {
        &self.program
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub fn get_envs(&self) -> &[(OsString, Option<OsString>)] {
        &self.envs
    }
}
