//! Process Runner
//!
//! Launches external executables and waits for them to finish. Each child
//! is fully awaited before the caller proceeds; `output()` drains stdout
//! and stderr concurrently so a chatty child cannot deadlock on a full
//! pipe buffer.

use std::process::Stdio;

use tokio::process::Command;

use crate::common::{Error, Result};

/// Captured result of one external-process invocation
#[derive(Debug)]
pub struct RunResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Both streams as one searchable text, stdout first
    pub fn combined_output(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

/// Render an argument vector the way it would be typed in a shell
pub fn render_command(command: &[String]) -> String {
    command.join(" ")
}

fn split_command(command: &[String]) -> Result<(&String, &[String])> {
    command
        .split_first()
        .ok_or_else(|| Error::Config("empty command".to_string()))
}

/// Run a command to completion, capturing stdout and stderr
///
/// A nonzero exit is not an error here; callers that treat it as one use
/// [`run_checked`]. `env` entries override the inherited environment.
pub async fn run_captured(command: &[String], env: &[(String, String)]) -> Result<RunResult> {
    let (program, args) = split_command(command)?;
    tracing::debug!(command = %render_command(command), "running (captured)");

    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd
        .output()
        .await
        .map_err(|e| Error::launch(command, e))?;

    Ok(RunResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run a command to completion, treating a nonzero exit as an error
pub async fn run_checked(command: &[String]) -> Result<RunResult> {
    let result = run_captured(command, &[]).await?;
    if !result.success() {
        return Err(Error::non_zero_exit(command, result.exit_code));
    }
    Ok(result)
}

/// Run a command with inherited stdout/stderr and return its exit code
pub async fn run_status(command: &[String]) -> Result<i32> {
    let (program, args) = split_command(command)?;
    tracing::debug!(command = %render_command(command), "running");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|e| Error::launch(command, e))?;

    Ok(status.code().unwrap_or(-1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn captures_stdout_and_stderr() {
        let result = run_captured(&cmd(&["sh", "-c", "echo out; echo err >&2"]), &[])
            .await
            .unwrap();
        assert!(result.success());
        assert_eq!(result.stdout, "out\n");
        assert_eq!(result.stderr, "err\n");
        assert_eq!(result.combined_output(), "out\nerr\n");
    }

    #[tokio::test]
    async fn env_overrides_reach_the_child() {
        let env = [("MAO_HARNESS_TEST_VAR".to_string(), "marker".to_string())];
        let result = run_captured(&cmd(&["sh", "-c", "echo $MAO_HARNESS_TEST_VAR"]), &env)
            .await
            .unwrap();
        assert_eq!(result.stdout, "marker\n");
    }

    #[tokio::test]
    async fn nonzero_exit_is_not_an_error_when_captured() {
        let result = run_captured(&cmd(&["sh", "-c", "exit 3"]), &[]).await.unwrap();
        assert_eq!(result.exit_code, 3);
        assert!(!result.success());
    }

    #[tokio::test]
    async fn run_checked_rejects_nonzero_exit() {
        let err = run_checked(&cmd(&["sh", "-c", "exit 2"])).await.unwrap_err();
        match err {
            Error::NonZeroExit { code, command } => {
                assert_eq!(code, 2);
                assert!(command.starts_with("sh"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_executable_is_a_launch_error() {
        let err = run_captured(&cmd(&["/no/such/mao-binary"]), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
    }

    #[tokio::test]
    async fn run_status_reports_exit_code() {
        assert_eq!(run_status(&cmd(&["true"])).await.unwrap(), 0);
        assert_eq!(run_status(&cmd(&["false"])).await.unwrap(), 1);
    }
}
