//! Composite logger tests
//!
//! Flattening, fan-out order with duplicates, and both failure policies.

mod fan_out;
