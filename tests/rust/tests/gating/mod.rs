//! Level gating and message formatting through the public helpers

mod formatting;
