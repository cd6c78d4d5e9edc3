//! src/mappers/flow_field.rs
use crate::extract::extract;
use crate::mappers::{MapEmitter, Mapper};
use crate::spec::FlowField;

/// Emits `(value, 1)` for every record line carrying the configured flow
/// field prefix; lines without the prefix emit nothing. The field is
/// fixed when the job is configured, one mapper serves all five fields.
pub struct FlowFieldMapper {
    prefix: &'static str,
}

impl FlowFieldMapper {
    pub fn new(field: FlowField) -> Self {
        FlowFieldMapper {
            prefix: field.prefix(),
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

impl Mapper for FlowFieldMapper {
    fn map<E: MapEmitter>(&self, line: &str, emitter: &mut E) {
        if let Some(value) = extract(line, self.prefix) {
            emitter.emit(value.to_string(), 1);
        }
    }
}
