//! src/executors/parallel.rs
use crate::configuration::ExecutorSettings;
use crate::error::JobError;
use crate::executors::{
    combine_pairs, group_pairs, map_split, read_input_lines, reduce_groups, write_totals,
    Executor, JobSummary,
};
use crate::mappers::FlowFieldMapper;
use crate::spec::JobSpecification;
use anyhow::Context;
use async_trait::async_trait;

/// Runs map and combine for each split on its own blocking task. Splits
/// share no mutable state; the group-by-key merge after the joins is the
/// only synchronization point.
pub struct ParallelExecutor {
    split_lines: usize,
}

impl ParallelExecutor {
    pub fn new(settings: &ExecutorSettings) -> Self {
        ParallelExecutor {
            split_lines: settings.split_lines.max(1),
        }
    }
}

#[async_trait]
impl Executor for ParallelExecutor {
    #[tracing::instrument(name = "Run parallel job", skip_all, fields(field = ?spec.field()))]
    async fn submit(&self, spec: &JobSpecification) -> Result<JobSummary, JobError> {
        let lines = read_input_lines(spec.inputs()).await?;
        let records = lines.len() as u64;

        let mut handles = vec![];
        for split in lines.chunks(self.split_lines) {
            let split = split.to_vec();
            let field = spec.field();
            let combine = spec.combine();
            handles.push(tokio::task::spawn_blocking(move || {
                let mapper = FlowFieldMapper::new(field);
                let mapped = map_split(&mapper, &split);
                let emitted = mapped.len() as u64;
                let mapped = if combine { combine_pairs(mapped) } else { mapped };
                (emitted, mapped)
            }));
        }
        tracing::debug!(tasks = handles.len(), "Spawned map tasks");

        let mut intermediate = vec![];
        let mut pairs = 0u64;
        for handle in handles {
            let (emitted, mapped) = handle.await.context("Failed to join map task")?;
            pairs += emitted;
            intermediate.extend(mapped);
        }

        let totals = reduce_groups(group_pairs(intermediate));
        let distinct_keys = totals.len() as u64;
        let path = write_totals(spec.output(), &totals).await?;
        tracing::info!(
            records,
            pairs,
            distinct_keys,
            output = %path.display(),
            "Wrote aggregation output"
        );
        Ok(JobSummary::new(records, pairs, distinct_keys))
    }
}
