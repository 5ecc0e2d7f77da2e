mod context;

pub use context::ExecutionContext;

use log::trace;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A fully described child process: what to run, where, and with which
/// environment overrides.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
    /// Applied in order on top of the inherited environment. `None` removes
    /// the variable.
    pub envs: Vec<(OsString, Option<OsString>)>,
}

impl Invocation {
    pub fn new(context: &ExecutionContext, args: Vec<OsString>) -> Self {
        Self {
            program: context.get_program().to_os_string(),
            args,
            current_dir: context.get_current_dir().map(Path::to_path_buf),
            envs: context.get_envs().to_vec(),
        }
    }

    pub fn program_lossy(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    // `Some(None)` means the variable is removed.
    #[cfg(test)]
    fn env(&self, key: impl AsRef<std::ffi::OsStr>) -> Option<Option<&std::ffi::OsStr>> {
        let key = key.as_ref();
        self.envs
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_deref())
    }
}

/// Captured result of a finished child process.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Runs the invocation to completion, capturing both output streams.
    ///
    /// An `Err` means the process could not be run at all; a process that
    /// ran and failed is still an `Ok` with a non-zero `code`.
    fn run(&self, invocation: &Invocation) -> std::io::Result<RunOutput>;
}

impl<F> CommandRunner for F
where
    F: Fn(&Invocation) -> std::io::Result<RunOutput>,
{
    fn run(&self, invocation: &Invocation) -> std::io::Result<RunOutput> {
        self(invocation)
    }
}

/// Spawns real processes with `std::process::Command`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<RunOutput> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }

        for (key, value) in &invocation.envs {
            match value {
                Some(value) => command.env(key, value),
                None => command.env_remove(key),
            };
        }

        trace!("spawning: {:?}", command);

        // `output` drains both pipes and waits on the child, including when
        // reading fails part way.
        let output = command.output()?;

        trace!("exit status: {}", output.status);

        Ok(RunOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
