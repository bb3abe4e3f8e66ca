//! Integration test harness.

mod controller_test;
mod sequence_test;
