//! src/executors/mod.rs
use crate::configuration::{ExecutorMode, ExecutorSettings};
use crate::error::JobError;
use crate::mappers::{Count, Key, Mapper, VecEmitter};
use crate::reducers::{Adder, Reducer};
use crate::spec::JobSpecification;
use anyhow::Context;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;

mod parallel;
pub use parallel::ParallelExecutor;

mod sequential;
pub use sequential::SequentialExecutor;

/// Name of the single output file an executor writes under the job's
/// output location.
pub const PART_FILE: &str = "part-0000";

/// What an executor reports back after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    records: u64,
    pairs: u64,
    distinct_keys: u64,
}

impl JobSummary {
    pub fn new(records: u64, pairs: u64, distinct_keys: u64) -> Self {
        JobSummary {
            records,
            pairs,
            distinct_keys,
        }
    }

    /// Input lines read across all input locations.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Intermediate pairs emitted by the map phase, before combining.
    pub fn pairs(&self) -> u64 {
        self.pairs
    }

    /// Distinct keys in the written output.
    pub fn distinct_keys(&self) -> u64 {
        self.distinct_keys
    }
}

/// The seam to the batch engine that actually runs a job. Partitioning,
/// grouping and output writing all happen behind this trait; the driver
/// only wires a specification to it.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn submit(&self, spec: &JobSpecification) -> Result<JobSummary, JobError>;
}

pub fn build_executor(settings: &ExecutorSettings) -> Box<dyn Executor> {
    match settings.mode {
        ExecutorMode::Sequential => Box::new(SequentialExecutor::new(settings)),
        ExecutorMode::Parallel => Box::new(ParallelExecutor::new(settings)),
    }
}

pub(crate) async fn read_input_lines(inputs: &[String]) -> Result<Vec<String>, JobError> {
    let mut lines = vec![];
    for location in inputs {
        let contents = tokio::fs::read_to_string(location)
            .await
            .with_context(|| format!("Failed to read input: {location}"))?;
        lines.extend(contents.lines().map(str::to_string));
    }
    Ok(lines)
}

pub(crate) fn map_split<M: Mapper>(mapper: &M, lines: &[String]) -> Vec<(Key, Count)> {
    let mut emitter = VecEmitter::default();
    for line in lines {
        mapper.map(line, &mut emitter);
    }
    emitter.into_pairs()
}

pub(crate) fn group_pairs(
    pairs: impl IntoIterator<Item = (Key, Count)>,
) -> BTreeMap<Key, Vec<Count>> {
    let mut groups: BTreeMap<Key, Vec<Count>> = BTreeMap::new();
    for (key, count) in pairs {
        groups.entry(key).or_default().push(count);
    }
    groups
}

/// Local pre-aggregation over one split's pairs, same logic as the
/// global reduce.
pub(crate) fn combine_pairs(pairs: Vec<(Key, Count)>) -> Vec<(Key, Count)> {
    reduce_groups(group_pairs(pairs)).into_iter().collect()
}

pub(crate) fn reduce_groups(groups: BTreeMap<Key, Vec<Count>>) -> BTreeMap<Key, Count> {
    groups
        .into_iter()
        .map(|(key, counts)| {
            let total = Adder.reduce(&key, counts);
            (key, total)
        })
        .collect()
}

pub(crate) async fn write_totals(
    location: &str,
    totals: &BTreeMap<Key, Count>,
) -> Result<PathBuf, JobError> {
    let out_dir = PathBuf::from(location);
    tokio::fs::create_dir_all(&out_dir)
        .await
        .with_context(|| format!("Failed to create output directory: {location}"))?;
    let mut contents = String::new();
    for (key, total) in totals {
        contents.push_str(&format!("{key}\t{total}\n"));
    }
    let path = out_dir.join(PART_FILE);
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(path)
}
