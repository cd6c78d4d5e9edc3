//! src/error.rs

/// Failure taxonomy for one job invocation. Every variant is terminal;
/// the binary maps each to a distinct process exit code.
#[derive(thiserror::Error)]
pub enum JobError {
    #[error("Usage: flowstat <field> <input> <output>")]
    Usage,
    #[error("Unknown flow field: {0}")]
    UnknownField(String),
    #[error("Job execution failed")]
    Execution(#[from] anyhow::Error),
}

impl JobError {
    pub fn exit_code(&self) -> u8 {
        match self {
            JobError::Usage => 2,
            JobError::UnknownField(_) => 255,
            JobError::Execution(_) => 1,
        }
    }
}

impl std::fmt::Debug for JobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
