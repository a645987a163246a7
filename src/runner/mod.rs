pub mod cases;
pub mod exec;
pub mod verdict;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::Reporter;
use cases::TestCase;
use exec::Executor;
use verdict::{judge, Judgement, Verdict};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("no corresponding input case: {}", .0.display())]
    OrphanOutput(PathBuf),
    #[error("failed to run the command `{command}`: {source}")]
    Spawn { command: String, source: io::Error },
}

impl RunnerError {
    fn io(path: &Path) -> impl Fn(io::Error) -> RunnerError + '_ {
        move |source| RunnerError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: String,
    pub verdict: Verdict,
}

/// Per-case verdicts of one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<CaseResult>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.verdict == Verdict::Ac).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Run `command` against every case, one after another.
///
/// Verdicts never stop the run; an unreadable case file or a command that can't start does.
pub async fn run_tests<E: Executor>(
    cases: &[TestCase],
    command: &str,
    executor: &E,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, RunnerError> {
    let mut summary = RunSummary::default();

    for case in cases {
        reporter.case_started(&case.name);

        let input = std::fs::read(&case.input).map_err(RunnerError::io(&case.input))?;
        let expected = match &case.expected {
            Some(path) => Some(std::fs::read(path).map_err(RunnerError::io(path))?),
            None => None,
        };

        let execution = executor
            .execute(command, &input)
            .await
            .map_err(|source| RunnerError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let judgement = if execution.timed_out {
            Judgement {
                verdict: Verdict::Tle,
                whitespace_only: false,
            }
        } else {
            judge(expected.as_deref(), &execution.stdout, execution.exit_code)
        };

        if judgement.whitespace_only {
            reporter.whitespace_only_mismatch(&case.name);
        }
        if execution.timed_out {
            if let Some(limit) = executor.time_limit() {
                reporter.timed_out(&case.name, limit);
            }
        } else if execution.exit_code != Some(0) {
            reporter.nonzero_exit(&case.name, execution.exit_code);
        }
        if judgement.verdict != Verdict::Ac {
            reporter.mismatch_details(&input, expected.as_deref(), &execution.stdout);
        }
        reporter.verdict(&case.name, judgement.verdict);

        summary.results.push(CaseResult {
            name: case.name.clone(),
            verdict: judgement.verdict,
        });
    }

    reporter.summary(summary.passed(), summary.total());
    Ok(summary)
}

// ── Tests ──
