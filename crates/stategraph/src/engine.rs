//! Apply-engine seam
//!
//! The engine that reconciles a desired-state graph against live
//! infrastructure lives outside this crate. Everything it owns - state-file
//! persistence, diffing, create/update/delete scheduling, retries, rollback -
//! is behind the [`Engine`] trait, so the builder's only obligations are a
//! correctly ordered graph and honest error propagation.

use crate::graph::Graph;
use crate::types::Node;
use anyhow::Result;
use std::io::Write;

/// External apply engine consuming a desired-state graph
///
/// `register` is called once per declaration, in declaration order, and
/// returns the identifier the engine assigns to the resource. Identifiers
/// are symbolic until reconciliation: the engine resolves them to live
/// identifiers when it applies the graph, after this program has returned.
/// `submit` hands over the completed graph.
pub trait Engine {
    /// Accept a single declaration, returning its assigned identifier
    fn register(&mut self, node: &Node) -> Result<String>;

    /// Accept the completed graph for reconciliation
    fn submit(&mut self, graph: &Graph) -> Result<()>;
}

/// In-memory engine that records everything it is handed
///
/// Accepts every declaration, assigns `kind.name` identifiers, and keeps
/// the submitted graph for inspection. Useful in tests and for dry
/// inspection of a fixture without a real engine attached.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    registered: Vec<String>,
    submitted: Option<Graph>,
}

impl RecordingEngine {
    /// Create an empty recording engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers assigned so far, in registration order
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// The graph handed to `submit`, if any
    pub fn submitted(&self) -> Option<&Graph> {
        self.submitted.as_ref()
    }
}

impl Engine for RecordingEngine {
    fn register(&mut self, node: &Node) -> Result<String> {
        let assigned = node.id.to_string();
        self.registered.push(assigned.clone());
        Ok(assigned)
    }

    fn submit(&mut self, graph: &Graph) -> Result<()> {
        self.submitted = Some(graph.clone());
        Ok(())
    }
}

/// Engine adapter that writes the submitted graph as a JSON plan
///
/// This is the hand-off format for an engine ingesting plans out of
/// process: registrations are acknowledged with symbolic identifiers and
/// the full graph is serialized once at submit time.
#[derive(Debug)]
pub struct PlanWriter<W: Write> {
    out: W,
}

impl<W: Write> PlanWriter<W> {
    /// Create a plan writer over any output sink
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the writer, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Engine for PlanWriter<W> {
    fn register(&mut self, node: &Node) -> Result<String> {
        log::debug!("registered {}", node.id);
        Ok(node.id.to_string())
    }

    fn submit(&mut self, graph: &Graph) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, graph)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
