//! tracing adapter tests
//!
//! Scoped subscribers only (`with_default`); nothing here installs a global
//! subscriber.
