use crate::runner::{CommandRunner, Invocation, RunOutput};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned process outcomes in order and records every invocation.
#[derive(Default)]
pub struct Fixture {
    outcomes: RefCell<VecDeque<std::io::Result<RunOutput>>>,
    pub invocations: RefCell<Vec<Invocation>>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exits(self, code: i32, stdout: &[u8]) -> Self {
        self.outcome(Ok(RunOutput {
            code: Some(code),
            stdout: stdout.to_vec(),
            stderr: Vec::new(),
        }))
    }

    pub fn fails(self, code: Option<i32>, stderr: &str) -> Self {
        self.outcome(Ok(RunOutput {
            code,
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        }))
    }

    pub fn cannot_spawn(self, kind: std::io::ErrorKind) -> Self {
        self.outcome(Err(std::io::Error::from(kind)))
    }

    fn outcome(self, outcome: std::io::Result<RunOutput>) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    pub fn args(&self, index: usize) -> Vec<String> {
        self.invocations.borrow()[index]
            .args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

impl CommandRunner for Fixture {
    fn run(&self, invocation: &Invocation) -> std::io::Result<RunOutput> {
        self.invocations.borrow_mut().push(invocation.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected invocation: {:#?}", invocation))
    }
}
