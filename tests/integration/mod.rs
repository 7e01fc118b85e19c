//! Integration tests for duplicate folder detection

mod duplicate_detection;
mod error_propagation;
mod test_utils;
