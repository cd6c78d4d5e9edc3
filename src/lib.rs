//! src/lib.rs
pub mod configuration;
pub mod error;
pub mod executors;
pub mod extract;
pub mod job;
pub mod mappers;
pub mod reducers;
pub mod spec;
pub mod telemetry;
#[cfg(test)]
mod test_utils;
