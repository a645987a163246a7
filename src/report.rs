use std::path::Path;
use std::time::Duration;

use tracing::{error, info};

use crate::runner::verdict::Verdict;

/// Sink for what the case store and the test runner have to say.
///
/// Every method has a no-op default so a frontend only overrides what it shows.
pub trait Reporter {
    fn wrote(&mut self, _path: &Path, _content: &[u8]) {}
    fn case_started(&mut self, _name: &str) {}
    fn whitespace_only_mismatch(&mut self, _name: &str) {}
    fn nonzero_exit(&mut self, _name: &str, _code: Option<i32>) {}
    fn timed_out(&mut self, _name: &str, _limit: Duration) {}
    fn mismatch_details(&mut self, _input: &[u8], _expected: Option<&[u8]>, _actual: &[u8]) {}
    fn verdict(&mut self, _name: &str, _verdict: Verdict) {}
    fn summary(&mut self, _passed: usize, _total: usize) {}
}

/// Writes everything through `tracing`.
pub struct TracingReporter;

impl TracingReporter {
    /// Log `bytes` as text when they decode, otherwise log why they don't.
    fn dump(label: &str, bytes: &[u8]) {
        match std::str::from_utf8(bytes) {
            Ok(text) => info!("{}:\n{}", label, text),
            Err(e) => error!("{}: {}", label, e),
        }
    }
}

impl Reporter for TracingReporter {
    fn wrote(&mut self, path: &Path, content: &[u8]) {
        match std::str::from_utf8(content) {
            Ok(text) => info!("write: {}\n{}", path.display(), text),
            Err(e) => info!("write: {}\n{}", path.display(), e),
        }
    }

    fn case_started(&mut self, name: &str) {
        info!("test {}", name);
    }

    fn whitespace_only_mismatch(&mut self, _name: &str) {
        info!("It would be AC if white-space characters were ignored. Use $ oj t --ignore-spaces-and-newlines");
    }

    fn nonzero_exit(&mut self, _name: &str, code: Option<i32>) {
        match code {
            Some(code) => info!("The return code is {}", code),
            None => info!("The process was terminated by a signal"),
        }
    }

    fn timed_out(&mut self, _name: &str, limit: Duration) {
        info!("Time limit exceeded ({:.1}s), the process was killed", limit.as_secs_f64());
    }

    fn mismatch_details(&mut self, input: &[u8], expected: Option<&[u8]>, actual: &[u8]) {
        Self::dump("input", input);
        if let Some(expected) = expected {
            Self::dump("expected output", expected);
        }
        Self::dump("actual output", actual);
    }

    fn verdict(&mut self, _name: &str, verdict: Verdict) {
        info!("{}", verdict);
    }

    fn summary(&mut self, passed: usize, total: usize) {
        info!("{} AC / {} cases", passed, total);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Reports nothing.
    pub struct NullReporter;
    impl Reporter for NullReporter {}

    /// Keeps every event as a line of text, for assertions.
    #[derive(Default)]
    pub struct RecordingReporter {
        pub events: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn wrote(&mut self, path: &Path, content: &[u8]) {
            let name = path.file_name().unwrap().to_string_lossy();
            self.events.push(format!("wrote {} ({} bytes)", name, content.len()));
        }
        fn case_started(&mut self, name: &str) {
            self.events.push(format!("start {}", name));
        }
        fn whitespace_only_mismatch(&mut self, name: &str) {
            self.events.push(format!("whitespace {}", name));
        }
        fn nonzero_exit(&mut self, name: &str, code: Option<i32>) {
            self.events.push(format!("exit {} {:?}", name, code));
        }
        fn timed_out(&mut self, name: &str, _limit: Duration) {
            self.events.push(format!("timeout {}", name));
        }
        fn verdict(&mut self, name: &str, verdict: Verdict) {
            self.events.push(format!("{} {}", name, verdict));
        }
        fn summary(&mut self, passed: usize, total: usize) {
            self.events.push(format!("{}/{}", passed, total));
        }
    }
}
