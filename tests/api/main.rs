//! tests/api/main.rs
