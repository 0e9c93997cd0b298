//! # stategraph
//!
//! A small framework for building desired-state resource graphs.
//!
//! This crate provides the declaration side of declarative provisioning:
//! describe resources, wire explicit dependency edges between them, and
//! hand the completed graph to an external apply engine. Everything that
//! makes declarative infrastructure hard - diffing against live state,
//! create/update/delete scheduling, retries, rollback - is the engine's
//! job, reached only through the [`Engine`] trait.
//!
//! ## Core Concepts
//!
//! - **Declare**: a desired-state description of one resource
//! - **Graph**: declaration records plus explicit ordering edges
//! - **BuildContext**: collects declarations, hands back [`Handle`]s whose
//!   engine-assigned identifiers dependents embed in their own attributes
//! - **Engine**: the external reconciler consuming the graph
//!
//! ## Example
//!
//! ```ignore
//! use stategraph::{BuildContext, Declare, RecordingEngine, runner};
//!
//! #[derive(Debug, serde::Serialize)]
//! struct Bucket { name: String }
//!
//! impl Declare for Bucket {
//!     fn name(&self) -> &str { &self.name }
//!     fn kind(&self) -> &'static str { "bucket" }
//!     fn description(&self) -> String { format!("Bucket {}", self.name) }
//!     fn attributes(&self) -> anyhow::Result<serde_json::Value> {
//!         Ok(serde_json::to_value(self)?)
//!     }
//! }
//!
//! let mut engine = RecordingEngine::new();
//! let summary = runner::run(&mut engine, |ctx| {
//!     let logs = ctx.declare(Bucket { name: "logs".into() }, &[])?;
//!     ctx.declare(Bucket { name: "archive".into() }, &[&logs])?;
//!     Ok(())
//! })?;
//! ```
//!
//! Declarations are emitted in strict dependency order; the graph rejects
//! duplicates and forward references at insert time, and the first failed
//! declaration aborts the build with no rollback attempted.

pub mod context;
pub mod engine;
pub mod error;
pub mod graph;
pub mod resource;
pub mod runner;
pub mod types;

// Re-export main types at crate root
pub use context::{BuildContext, Handle};
pub use engine::{Engine, PlanWriter, RecordingEngine};
pub use error::{Error, Result};
pub use graph::Graph;
pub use resource::Declare;
pub use types::{BuildSummary, Node, NodeId};
