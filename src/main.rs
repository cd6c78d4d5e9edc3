//! src/main.rs
use anyhow::Context;
use flowstat::configuration::get_configuration;
use flowstat::error::JobError;
use flowstat::executors::build_executor;
use flowstat::job;
use flowstat::telemetry::init_tracing;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match try_main(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:?}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn try_main(args: &[String]) -> Result<(), JobError> {
    let spec = job::parse_args(args)?;
    init_tracing()?;
    let settings = get_configuration().context("Failed to read configuration.")?;
    let executor = build_executor(&settings.executor);
    job::run(spec, executor.as_ref()).await?;
    Ok(())
}
