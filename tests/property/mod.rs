//! Property-based tests for fingerprint and detection guarantees

mod determinism;
