//! src/executors/sequential.rs
use crate::configuration::ExecutorSettings;
use crate::error::JobError;
use crate::executors::{
    combine_pairs, group_pairs, map_split, read_input_lines, reduce_groups, write_totals,
    Executor, JobSummary,
};
use crate::mappers::FlowFieldMapper;
use crate::spec::JobSpecification;
use async_trait::async_trait;

/// Single-threaded engine: maps every split in turn, then reduces. The
/// reference against which the parallel engine is checked.
pub struct SequentialExecutor {
    split_lines: usize,
}

impl SequentialExecutor {
    pub fn new(settings: &ExecutorSettings) -> Self {
        SequentialExecutor {
            split_lines: settings.split_lines.max(1),
        }
    }
}

#[async_trait]
impl Executor for SequentialExecutor {
    #[tracing::instrument(name = "Run sequential job", skip_all, fields(field = ?spec.field()))]
    async fn submit(&self, spec: &JobSpecification) -> Result<JobSummary, JobError> {
        let mapper = FlowFieldMapper::new(spec.field());
        let lines = read_input_lines(spec.inputs()).await?;
        let records = lines.len() as u64;

        let mut intermediate = vec![];
        let mut pairs = 0u64;
        for split in lines.chunks(self.split_lines) {
            let mapped = map_split(&mapper, split);
            pairs += mapped.len() as u64;
            let mapped = if spec.combine() {
                combine_pairs(mapped)
            } else {
                mapped
            };
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
