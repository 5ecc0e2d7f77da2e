mod cli;

use anyhow::Context;
use clap::Parser as _;
use cli::{Args, Commands};
use git_config_reader::{ConfigReader, Error, ExecutionContext};
use log::trace;
use std::process::ExitCode;

pub fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    trace!("args: {:?}", args);

    let mut context = ExecutionContext::new().program(&args.git);
    if let Some(dir) = &args.dir {
        context = context.current_dir(dir);
    }

    let reader = ConfigReader::with_context(context);

    let (what, result) = match &args.command {
        Commands::Get { key, scope } => (key.as_str(), reader.query(*scope, key)),
        Commands::Username => ("user.name", reader.username()),
        Commands::Email => ("user.email", reader.email()),
        Commands::GithubToken => ("github.token", reader.github_token()),
        Commands::OriginUrl => ("remote.origin.url", reader.origin_url()),
        Commands::Repository => ("repository name", reader.repository_name()),
    };

    match result {
        Ok(value) => {
            println!("{}", value);
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::NotFound) => {
            eprintln!("{} is not set", what);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).with_context(|| format!("failed to read {}", what)),
    }
}
