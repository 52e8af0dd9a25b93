//! Execution sandboxes.
//!
//! A sandbox is a short-lived execution environment that receives a
//! serialised [`ScoringJob`] and hands back whatever the run printed. The
//! only contract on the way out is plain text in the
//! [`report`](confessional_core::report) format.
//!
//! [`run_scoring_job`] owns the sandbox lifecycle: acquire, execute, and
//! release on every exit path.

mod in_process;
mod job;

use std::fmt;

use async_trait::async_trait;

use crate::error::{AgentError, AgentResult};

pub use in_process::InProcessProvider;
pub use job::ScoringJob;

/// Captured result of running code in a sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// A provisioned execution environment.
#[async_trait]
pub trait Sandbox: Send + Sync + fmt::Debug {
    /// Provider-assigned identifier, for logging.
    fn id(&self) -> &str;

    /// Run code and capture its output.
    async fn execute(&self, code: &str) -> AgentResult<ExecutionOutput>;

    /// Tear the environment down.
    async fn kill(&self) -> AgentResult<()>;
}

/// Hands out fresh sandboxes.
#[async_trait]
pub trait ExecutionProvider: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn create(&self) -> AgentResult<Box<dyn Sandbox>>;
}

/// Run a scoring job in a fresh sandbox and return its stdout.
///
/// The sandbox is killed whether execution succeeds, errors, or exits
/// non-zero. If execution failed, that error is returned even when the kill
/// also fails; a kill failure after a good run is logged and the output is
/// still returned.
pub async fn run_scoring_job(
    provider: &dyn ExecutionProvider,
    job: &ScoringJob,
) -> AgentResult<String> {
    let code = job.to_code()?;
    let sandbox = provider.create().await?;
    log::info!(
        "Executing scoring job in {} sandbox {}",
        provider.name(),
        sandbox.id()
    );

    let outcome = execute_checked(sandbox.as_ref(), &code).await;

    match sandbox.kill().await {
        Ok(()) => log::info!("Sandbox {} cleaned up", sandbox.id()),
        Err(e) => log::warn!("Failed to clean up sandbox {}: {}", sandbox.id(), e),
    }

    if let Err(ref e) = outcome {
        log::error!("Error during sandbox execution: {}", e);
    }
    outcome
}

async fn execute_checked(sandbox: &dyn Sandbox, code: &str) -> AgentResult<String> {
    let output = sandbox.execute(code).await?;
    if output.exit_code != 0 {
        return Err(AgentError::ExecutionFailed {
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confessional_core::{Catalog, ScoringPolicy};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy)]
    enum Behaviour {
        Succeed,
        ExecuteError,
        NonZeroExit,
        KillError,
    }

    /// Provider whose sandboxes count kills and fail on request.
    #[derive(Debug)]
    struct RecordingProvider {
        behaviour: Behaviour,
        created: Arc<AtomicUsize>,
        killed: Arc<AtomicUsize>,
    }

    impl RecordingProvider {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                created: Arc::new(AtomicUsize::new(0)),
                killed: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[derive(Debug)]
    struct RecordingSandbox {
        behaviour: Behaviour,
        killed: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ExecutionProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn create(&self) -> AgentResult<Box<dyn Sandbox>> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(RecordingSandbox {
                behaviour: self.behaviour,
                killed: Arc::clone(&self.killed),
            }))
        }
    }

    #[async_trait]
    impl Sandbox for RecordingSandbox {
        fn id(&self) -> &str {
            "rec-1"
        }

        async fn execute(&self, _code: &str) -> AgentResult<ExecutionOutput> {
            match self.behaviour {
                Behaviour::Succeed | Behaviour::KillError => Ok(ExecutionOutput {
                    stdout: "Best Match: Stolen\n".to_string(),
                    ..ExecutionOutput::default()
                }),
                Behaviour::ExecuteError => Err(AgentError::Sandbox {
                    provider: "recording".to_string(),
                    message: "connection reset".to_string(),
                }),
                Behaviour::NonZeroExit => Ok(ExecutionOutput {
                    stderr: "Traceback\n".to_string(),
                    exit_code: 2,
                    ..ExecutionOutput::default()
                }),
            }
        }

        async fn kill(&self) -> AgentResult<()> {
            self.killed.fetch_add(1, Ordering::SeqCst);
            if matches!(self.behaviour, Behaviour::KillError) {
                return Err(AgentError::Sandbox {
                    provider: "recording".to_string(),
                    message: "already gone".to_string(),
                });
            }
            Ok(())
        }
    }

    fn job() -> ScoringJob {
        ScoringJob::new("stolen", ScoringPolicy::Substring, &Catalog::lyric_snippets())
    }

    #[tokio::test]
    async fn test_success_releases_sandbox() {
        let provider = RecordingProvider::new(Behaviour::Succeed);
        let stdout = run_scoring_job(&provider, &job()).await.unwrap();
        assert_eq!(stdout, "Best Match: Stolen\n");
        assert_eq!(provider.created.load(Ordering::SeqCst), 1);
        assert_eq!(provider.killed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_execute_error_still_releases_sandbox() {
        let provider = RecordingProvider::new(Behaviour::ExecuteError);
        let err = run_scoring_job(&provider, &job()).await.unwrap_err();
        assert!(matches!(err, AgentError::Sandbox { .. }));
        assert_eq!(provider.killed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_error_and_releases() {
        let provider = RecordingProvider::new(Behaviour::NonZeroExit);
        let err = run_scoring_job(&provider, &job()).await.unwrap_err();
        match err {
            AgentError::ExecutionFailed { exit_code, stderr } => {
                assert_eq!(exit_code, 2);
                assert_eq!(stderr, "Traceback");
            }
            other => panic!("expected ExecutionFailed, got {other:?}"),
        }
        assert_eq!(provider.killed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_kill_failure_after_success_keeps_output() {
        let provider = RecordingProvider::new(Behaviour::KillError);
        let stdout = run_scoring_job(&provider, &job()).await.unwrap();
        assert_eq!(stdout, "Best Match: Stolen\n");
        assert_eq!(provider.killed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_in_process_provider_end_to_end() {
        let stdout = run_scoring_job(&InProcessProvider::new(), &job()).await.unwrap();
        assert!(stdout.contains("Best Match: Stolen"));
        assert!(stdout.contains("Lyrics Snippet: i know that you were stolen from somewhere"));
    }
}
