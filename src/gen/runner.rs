//! External tool execution
//!
//! Spawns the atlas tool and waits for it to finish. The child process is
//! fully awaited before any output file is touched; nothing is left dangling
//! on either path. This module knows nothing about field types or overrides,
//! it only runs a fully built command.

use crate::error::PipelineError;
use crate::gen::invocation::ToolInvocation;
use tokio::process::Command;
use tracing::debug;

/// Run the external atlas tool to completion.
///
/// A spawn failure (binary missing, permission denied) and a non-zero exit
/// are both fatal; the non-zero case carries the exit status and captured
/// stderr.
pub async fn run_tool(invocation: &ToolInvocation) -> Result<(), PipelineError> {
    debug!("Running {} {:?}", invocation.program, invocation.args);

    let output = Command::new(&invocation.program)
        .args(&invocation.args)
        .output()
        .await
        .map_err(|e| PipelineError::ToolExecution {
            program: invocation.program.clone(),
            detail: format!("failed to start: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PipelineError::ToolExecution {
            program: invocation.program.clone(),
            detail: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn invocation(program: &str, args: &[&str]) -> ToolInvocation {
        ToolInvocation {
            program: program.to_string(),
            args: args.iter().map(OsString::from).collect(),
        }
    }

    #[tokio::test]
    async fn run_tool_succeeds_for_a_zero_exit() {
        run_tool(&invocation("true", &[])).await.unwrap();
    }

    #[tokio::test]
    async fn run_tool_reports_a_non_zero_exit_with_stderr() {
        let err = run_tool(&invocation("sh", &["-c", "echo broken glyph >&2; exit 3"]))
            .await
            .unwrap_err();
        match err {
            PipelineError::ToolExecution { detail, .. } => {
                assert!(detail.contains("broken glyph"), "detail: {detail}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_tool_reports_a_missing_binary() {
        let err = run_tool(&invocation("/no/such/atlas-tool", &[]))
            .await
            .unwrap_err();
        match err {
            PipelineError::ToolExecution { detail, .. } => {
                assert!(detail.contains("failed to start"), "detail: {detail}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
