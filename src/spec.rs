//! src/spec.rs
use crate::error::JobError;
use std::str::FromStr;

/// The flow record field a job groups by. Each variant names one prefix
/// token as it appears at the start of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowField {
    SrcAddr,
    DstAddr,
    SrcPort,
    DstPort,
    Protocol,
}

impl FlowField {
    /// The literal marker opening a record line that carries this field.
    pub fn prefix(&self) -> &'static str {
        match self {
            FlowField::SrcAddr => "SrcAddr:",
            FlowField::DstAddr => "DstAddr:",
            FlowField::SrcPort => "SrcPort:",
            FlowField::DstPort => "DstPort:",
            FlowField::Protocol => "Protocol:",
        }
    }
}

impl FromStr for FlowField {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SrcAddr" => Ok(FlowField::SrcAddr),
            "DstAddr" => Ok(FlowField::DstAddr),
            "SrcPort" => Ok(FlowField::SrcPort),
            "DstPort" => Ok(FlowField::DstPort),
            "Protocol" => Ok(FlowField::Protocol),
            other => Err(JobError::UnknownField(other.to_string())),
        }
    }
}

/// Everything an executor needs to run one aggregation job: which field
/// to group by, where the input lines live and where the totals go.
#[derive(Debug, Clone)]
pub struct JobSpecification {
    field: FlowField,
    inputs: Vec<String>,
    output: String,
    combine: bool,
}

impl JobSpecification {
    pub fn new(field: FlowField, output: &str) -> Self {
        JobSpecification {
            field,
            inputs: vec![],
            output: output.into(),
            combine: true,
        }
    }

    pub fn field(&self) -> FlowField {
        self.field
    }

    pub fn add_input(&mut self, location: &str) {
        self.inputs.push(location.into());
    }

    pub fn inputs(&self) -> &Vec<String> {
        &self.inputs
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Whether the per-split pre-aggregation pass runs before the global
    /// reduce. Totals are identical either way; on by default.
    pub fn combine(&self) -> bool {
        self.combine
    }

    pub fn set_combine(&mut self, combine: bool) {
        self.combine = combine;
    }
}
