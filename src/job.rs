//! src/job.rs
use crate::error::JobError;
use crate::executors::{Executor, JobSummary};
use crate::spec::{FlowField, JobSpecification};
use uuid::Uuid;

/// Builds a job specification from the raw CLI arguments: exactly three
/// positional arguments, `<field> <input> <output>`.
pub fn parse_args(args: &[String]) -> Result<JobSpecification, JobError> {
    if args.len() != 3 {
        return Err(JobError::Usage);
    }
    let field: FlowField = args[0].parse()?;
    let mut spec = JobSpecification::new(field, &args[2]);
    spec.add_input(&args[1]);
    Ok(spec)
}

/// Hands the specification to the executor, with the mapper wired to the
/// aggregator for both the combine and the reduce role, and reports the
/// run's summary.
#[tracing::instrument(name = "Run aggregation job", skip_all, fields(field = ?spec.field()))]
pub async fn run(
    spec: JobSpecification,
    executor: &dyn Executor,
) -> Result<JobSummary, JobError> {
    let job_id = Uuid::new_v4();
    tracing::info!(
        %job_id,
        inputs = spec.inputs().len(),
        output = spec.output(),
        combine = spec.combine(),
        "Submitting job"
    );
    let summary = executor.submit(&spec).await?;
    tracing::info!(
        %job_id,
        records = summary.records(),
        pairs = summary.pairs(),
        distinct_keys = summary.distinct_keys(),
        "Job complete"
    );
    Ok(summary)
}
