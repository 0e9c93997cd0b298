//! Program-boundary adapter
//!
//! Runs a build callback against an engine: create the context, let the
//! callback declare its resources, submit the completed graph. The result
//! maps directly to process exit status at the caller.

use crate::context::BuildContext;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::types::BuildSummary;

/// Build a desired-state graph and hand it to the engine
///
/// The callback receives an explicit [`BuildContext`] rather than
/// registering itself with any process-wide runtime. On the first failed
/// declaration the build aborts and the error propagates unchanged; the
/// graph is only submitted when every declaration succeeded.
pub fn run<F>(engine: &mut dyn Engine, build: F) -> Result<BuildSummary>
where
    F: FnOnce(&mut BuildContext) -> Result<()>,
{
    let mut ctx = BuildContext::new(engine);
    build(&mut ctx)?;

    let graph = ctx.into_graph();
    engine.submit(&graph).map_err(Error::Submit)?;

    let summary = graph.summary();
    log::debug!(
        "submitted graph: {} resources, {} edges",
        summary.resources,
        summary.edges
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecordingEngine;
    use crate::graph::Graph;
    use crate::resource::Declare;
    use crate::types::Node;

    #[derive(Debug, serde::Serialize)]
    struct Thing {
        name: String,
    }

    impl Declare for Thing {
        fn name(&self) -> &str {
            &self.name
        }

        fn kind(&self) -> &'static str {
            "thing"
        }

        fn description(&self) -> String {
            format!("Thing {}", self.name)
        }

        fn attributes(&self) -> anyhow::Result<serde_json::Value> {
            Ok(serde_json::to_value(self)?)
        }
    }

    /// Engine that accepts a fixed number of registrations, then fails
    struct FailAfter {
        ok: usize,
        calls: usize,
        submitted: bool,
    }

    impl Engine for FailAfter {
        fn register(&mut self, node: &Node) -> anyhow::Result<String> {
            self.calls += 1;
            if self.calls > self.ok {
                anyhow::bail!("engine refused {}", node.id);
            }
            Ok(node.id.to_string())
        }

        fn submit(&mut self, _graph: &Graph) -> anyhow::Result<()> {
            self.submitted = true;
            Ok(())
        }
    }

    #[test]
    fn test_run_submits_completed_graph() {
        let mut engine = RecordingEngine::new();

        let summary = run(&mut engine, |ctx| {
            let a = ctx.declare(
                Thing {
                    name: "a".to_string(),
                },
                &[],
            )?;
            ctx.declare(
                Thing {
                    name: "b".to_string(),
                },
                &[&a],
            )?;
            Ok(())
        })
        .unwrap();

        assert_eq!(summary, BuildSummary { resources: 2, edges: 1 });
        assert_eq!(engine.submitted().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_build_is_not_submitted() {
        let mut engine = RecordingEngine::new();

        let result = run(&mut engine, |ctx| {
            ctx.declare(
                Thing {
                    name: "a".to_string(),
                },
                &[],
            )?;
            Err(Error::Submit(anyhow::anyhow!("build gave up")))
        });

        assert!(result.is_err());
        assert!(engine.submitted().is_none());
    }

    #[test]
    fn test_engine_failure_halts_declarations() {
        let mut engine = FailAfter {
            ok: 1,
            calls: 0,
            submitted: false,
        };

        let result = run(&mut engine, |ctx| {
            let a = ctx.declare(
                Thing {
                    name: "a".to_string(),
                },
                &[],
            )?;
            let b = ctx.declare(
                Thing {
                    name: "b".to_string(),
                },
                &[&a],
            )?;
            ctx.declare(
                Thing {
                    name: "c".to_string(),
                },
                &[&b],
            )?;
            Ok(())
        });

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Rejected { .. }));
        // The second registration failed; the third was never attempted.
        assert_eq!(engine.calls, 2);
        assert!(!engine.submitted);
    }
}
