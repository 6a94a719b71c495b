//! Composite (fan-out) logger
//!
//! Merges several backends into one logical logger. Composites never nest:
//! building a composite out of other composites splices their children in,
//! so every composite is exactly one level deep.
//!
//! ```text
//! C1 = composite(A, B)   -> [A, B]
//! C2 = composite(C1, A)  -> [A] ++ [A, B] = [A, A, B]
//! C3 = composite(C2)     -> [A, A, B]
//! ```
//!
//! Duplicates are kept. A backend reachable twice receives every event twice.

use std::error::Error;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{ChildFailure, Level, LogError, Logger, Result, SharedLogger};

/// What a composite does when one of its children fails to log
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FanOutPolicy {
    /// Return the failing child's error unchanged; later children are skipped
    #[default]
    AbortOnFirstError,
    /// Call every child, then report all failures as [`LogError::FanOut`]
    ContinueOnError,
}

impl FanOutPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "abort" | "abortonfirsterror" => Some(Self::AbortOnFirstError),
            "continue" | "continueonerror" => Some(Self::ContinueOnError),
            _ => None,
        }
    }
}

/// Fans every event out to a flat list of child loggers
pub struct CompositeLogger {
    children: Vec<SharedLogger>,
    policy: FanOutPolicy,
}

impl CompositeLogger {
    /// Build a composite with the default abort-on-first-error policy
    pub fn new(loggers: impl IntoIterator<Item = SharedLogger>) -> Self {
        Self::with_policy(loggers, FanOutPolicy::default())
    }

    /// Build a composite, flattening any composites among `loggers`.
    ///
    /// Non-composite inputs keep their relative order and come first; the
    /// children of each composite input follow, in input order.
    pub fn with_policy(
        loggers: impl IntoIterator<Item = SharedLogger>,
        policy: FanOutPolicy,
    ) -> Self {
        let (composites, mut children): (Vec<SharedLogger>, Vec<SharedLogger>) = loggers
            .into_iter()
            .partition(|logger| logger.as_composite().is_some());

        for composite in &composites {
            if let Some(inner) = composite.as_composite() {
                // inner is already flat
                children.extend(inner.children.iter().cloned());
            }
        }

        Self { children, policy }
    }

    /// The flattened children, in fan-out order
    pub fn children(&self) -> &[SharedLogger] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn policy(&self) -> FanOutPolicy {
        self.policy
    }
}

impl Logger for CompositeLogger {
    /// Always true: gating is left to the children.
    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn log(
        &self,
        level: Level,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        match self.policy {
            FanOutPolicy::AbortOnFirstError => {
                for child in &self.children {
                    child.log(level, error, template, args)?;
                }
                Ok(())
            }
            FanOutPolicy::ContinueOnError => {
                let failures: Vec<ChildFailure> = self
                    .children
                    .iter()
                    .enumerate()
                    .filter_map(|(index, child)| {
                        child
                            .log(level, error, template, args)
                            .err()
                            .map(|error| ChildFailure {
                                index,
                                backend: child.name(),
                                error,
                            })
                    })
                    .collect();

                if failures.is_empty() {
                    Ok(())
                } else {
                    trace!(
                        failed = failures.len(),
                        total = self.children.len(),
                        "[Composite] Fan-out had failures"
                    );
                    Err(LogError::FanOut(failures))
                }
            }
        }
    }

    fn name(&self) -> String {
        let names: Vec<String> = self.children.iter().map(|c| c.name()).collect();
        format!("composite[{}]", names.join(", "))
    }

    fn as_composite(&self) -> Option<&CompositeLogger> {
        Some(self)
    }
}

impl std::fmt::Debug for CompositeLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeLogger")
            .field("children", &self.name())
            .field("policy", &self.policy)
            .finish()
    }
}
