use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// What came back from one run of the candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub stdout: Vec<u8>,
    /// `None` when the process was killed by a signal or by us.
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

/// Runs a command with `stdin` piped in and stdout captured.
///
/// An `Err` means the process could not be run at all, as opposed to running and failing.
pub trait Executor {
    async fn execute(&self, command: &str, stdin: &[u8]) -> io::Result<Execution>;

    fn time_limit(&self) -> Option<Duration> {
        None
    }
}

/// Hands the command string to the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    pub timeout: Option<Duration>,
}

impl ShellExecutor {
    pub fn new(timeout: Option<Duration>) -> Self {
        ShellExecutor { timeout }
    }
}

fn shell(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

impl Executor for ShellExecutor {
    async fn execute(&self, command: &str, stdin: &[u8]) -> io::Result<Execution> {
        let mut child = shell(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()?;

        // Feed stdin on its own task so a chatty child can't deadlock on a full stdout pipe.
        if let Some(mut pipe) = child.stdin.take() {
            let input = stdin.to_vec();
            tokio::spawn(async move {
                if let Err(e) = pipe.write_all(&input).await {
                    debug!("stdin closed early: {}", e);
                }
            });
        }

        let output = match self.timeout {
            None => child.wait_with_output().await?,
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(output) => output?,
                // Dropping the future drops the child, which kills it.
                Err(_) => {
                    return Ok(Execution {
                        stdout: Vec::new(),
                        exit_code: None,
                        timed_out: true,
                    })
                }
            },
        };

        Ok(Execution {
            stdout: output.stdout,
            exit_code: output.status.code(),
            timed_out: false,
        })
    }

    fn time_limit(&self) -> Option<Duration> {
        self.timeout
    }
}

// ── Tests ──
