use async_trait::async_trait;
use uuid::Uuid;

use super::{ExecutionOutput, ExecutionProvider, Sandbox, ScoringJob};
use crate::error::AgentResult;

/// Runs scoring jobs inside the current process.
///
/// Behaves like a remote sandbox from the caller's point of view: the job
/// arrives as serialised code, the result leaves as captured stdout, and a
/// job that cannot be decoded or evaluated exits non-zero with the reason on
/// stderr.
#[derive(Debug, Clone, Default)]
pub struct InProcessProvider;

impl InProcessProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExecutionProvider for InProcessProvider {
    fn name(&self) -> &str {
        "in-process"
    }

    async fn create(&self) -> AgentResult<Box<dyn Sandbox>> {
        Ok(Box::new(InProcessSandbox {
            id: Uuid::new_v4().to_string(),
        }))
    }
}

#[derive(Debug)]
struct InProcessSandbox {
    id: String,
}

#[async_trait]
impl Sandbox for InProcessSandbox {
    fn id(&self) -> &str {
        &self.id
    }

    async fn execute(&self, code: &str) -> AgentResult<ExecutionOutput> {
        let output = match ScoringJob::from_code(code).and_then(|job| job.evaluate()) {
            Ok(stdout) => ExecutionOutput {
                stdout,
                stderr: String::new(),
                exit_code: 0,
            },
            Err(e) => ExecutionOutput {
                stdout: String::new(),
                stderr: e.to_string(),
                exit_code: 1,
            },
        };
        Ok(output)
    }

    async fn kill(&self) -> AgentResult<()> {
        log::debug!("Released in-process sandbox {}", self.id);
        Ok(())
    }
}
