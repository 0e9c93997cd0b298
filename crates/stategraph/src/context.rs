//! Build context - the declaration entry point
//!
//! A `BuildContext` is handed to the build callback and collects
//! declarations into a graph while forwarding each one to the engine.
//! Execution is single-threaded and synchronous: each `declare` call is
//! fully checked before the next can be issued, and the first error aborts
//! the build with no rollback (compensation belongs to the engine).

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::resource::Declare;
use crate::types::{Node, NodeId};
use std::collections::BTreeSet;

/// Reference to a declared resource
///
/// Returned by [`BuildContext::declare`]; carries the node's graph identity
/// and the identifier the engine assigned to the resource. Dependents embed
/// the assigned identifier in their own attributes and pass the handle as an
/// explicit dependency.
#[derive(Debug, Clone)]
pub struct Handle {
    node: NodeId,
    id: String,
}

impl Handle {
    /// Graph identity of the declaration
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    /// Engine-assigned identifier of the resource
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Collects declarations into a desired-state graph
pub struct BuildContext<'e> {
    graph: Graph,
    engine: &'e mut dyn Engine,
    assigned: BTreeSet<String>,
}

impl<'e> BuildContext<'e> {
    /// Create a context declaring into the given engine
    pub fn new(engine: &'e mut dyn Engine) -> Self {
        Self {
            graph: Graph::new(),
            engine,
            assigned: BTreeSet::new(),
        }
    }

    /// Declare a resource with its explicit dependency list
    ///
    /// Dependencies must always be supplied in full - the engine may infer
    /// some edges from attribute references, but this builder never relies
    /// on inference. An entity whose existence is conditional still passes
    /// its dependency handles, because declaration order matters even when
    /// no value flows along the edge.
    ///
    /// Checks run in order: attribute validation, reference resolution,
    /// graph invariants (unique id, no forward edges), engine registration.
    /// The first failure is returned unchanged and nothing further is
    /// attempted.
    pub fn declare(&mut self, resource: impl Declare, deps: &[&Handle]) -> Result<Handle> {
        let id = NodeId::new(resource.kind(), resource.name());

        resource.validate().map_err(|reason| Error::Validation {
            id: id.clone(),
            reason,
        })?;

        for reference in resource.references() {
            if !self.assigned.contains(&reference) {
                return Err(Error::UnknownReference {
                    id: id.clone(),
                    reference,
                });
            }
        }

        let attrs = resource.attributes().map_err(|reason| Error::Validation {
            id: id.clone(),
            reason,
        })?;

        let node = Node {
            id: id.clone(),
            description: resource.description(),
            attrs,
            depends_on: deps.iter().map(|h| h.node.clone()).collect(),
        };

        // The node stays in the graph even if the engine refuses it: the
        // build aborts as a whole and partial rollback is not ours to do.
        self.graph.insert(node.clone())?;

        let assigned = self
            .engine
            .register(&node)
            .map_err(|reason| Error::Rejected {
                id: id.clone(),
                reason,
            })?;

        log::debug!("declared {id} -> {assigned}");
        self.assigned.insert(assigned.clone());

        Ok(Handle { node: id, id: assigned })
    }

    /// The graph as declared so far
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consume the context, yielding the completed graph
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecordingEngine;

    #[derive(Debug, serde::Serialize)]
    struct TestResource {
        name: String,
        #[serde(skip)]
        refs: Vec<String>,
        #[serde(skip)]
        valid: bool,
    }

    impl TestResource {
        fn named(name: &str) -> Self {
            Self {
                name: name.to_string(),
                refs: vec![],
                valid: true,
            }
        }
    }

    impl Declare for TestResource {
        fn name(&self) -> &str {
            &self.name
        }

        fn kind(&self) -> &'static str {
            "test"
        }

        fn description(&self) -> String {
            format!("Test resource {}", self.name)
        }

        fn validate(&self) -> anyhow::Result<()> {
            if !self.valid {
                anyhow::bail!("marked invalid");
            }
            Ok(())
        }

        fn attributes(&self) -> anyhow::Result<serde_json::Value> {
            Ok(serde_json::to_value(self)?)
        }

        fn references(&self) -> Vec<String> {
            self.refs.clone()
        }
    }

    #[test]
    fn test_declare_returns_handle() {
        let mut engine = RecordingEngine::new();
        let mut ctx = BuildContext::new(&mut engine);

        let handle = ctx.declare(TestResource::named("one"), &[]).unwrap();
        assert_eq!(handle.id(), "test.one");
        assert_eq!(handle.node(), &NodeId::new("test", "one"));
        assert_eq!(ctx.graph().len(), 1);
    }

    #[test]
    fn test_dependency_edges_recorded() {
        let mut engine = RecordingEngine::new();
        let mut ctx = BuildContext::new(&mut engine);

        let one = ctx.declare(TestResource::named("one"), &[]).unwrap();
        let two = ctx.declare(TestResource::named("two"), &[&one]).unwrap();

        let graph = ctx.into_graph();
        let node = graph.node(two.node()).unwrap();
        assert_eq!(node.depends_on, vec![one.node().clone()]);
    }

    #[test]
    fn test_invalid_resource_rejected() {
        let mut engine = RecordingEngine::new();
        let mut ctx = BuildContext::new(&mut engine);

        let mut bad = TestResource::named("bad");
        bad.valid = false;

        let err = ctx.declare(bad, &[]).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        // Nothing reached the engine.
        assert!(engine.registered().is_empty());
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let mut engine = RecordingEngine::new();
        let mut ctx = BuildContext::new(&mut engine);

        let mut orphan = TestResource::named("orphan");
        orphan.refs = vec!["test.ghost".to_string()];

        let err = ctx.declare(orphan, &[]).unwrap_err();
        match err {
            Error::UnknownReference { reference, .. } => assert_eq!(reference, "test.ghost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reference_to_declared_resource_accepted() {
        let mut engine = RecordingEngine::new();
        let mut ctx = BuildContext::new(&mut engine);

        let one = ctx.declare(TestResource::named("one"), &[]).unwrap();

        let mut two = TestResource::named("two");
        two.refs = vec![one.id().to_string()];
        ctx.declare(two, &[&one]).unwrap();
    }

    #[test]
    fn test_duplicate_declaration_rejected() {
        let mut engine = RecordingEngine::new();
        let mut ctx = BuildContext::new(&mut engine);

        ctx.declare(TestResource::named("one"), &[]).unwrap();
        let err = ctx.declare(TestResource::named("one"), &[]).unwrap_err();
        assert!(matches!(err, Error::Duplicate(_)));
    }
}
