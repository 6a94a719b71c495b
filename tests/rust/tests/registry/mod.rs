//! Registry tests
//!
//! `injected` works on private `LogRegistry` instances; `process_wide`
//! touches the global one and serializes its tests.

mod process_wide;
