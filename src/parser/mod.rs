pub mod container;
pub mod heading;
pub mod matcher;
pub mod samples;
pub mod tokens;

use std::fmt;

use matcher::Matcher;
use samples::{SamplePair, SampleParseError};

/// Judge sites whose problem pages we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    AtCoder,
    Codeforces,
}

impl Site {
    pub fn from_host(host: &str) -> Option<Self> {
        match host {
            "atcoder.jp" => Some(Site::AtCoder),
            "codeforces.com" => Some(Site::Codeforces),
            _ => None,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::AtCoder => f.write_str("AtCoder"),
            Site::Codeforces => f.write_str("Codeforces"),
        }
    }
}

/// Pipeline: html → tokens → site matcher → sample pairs.
pub fn extract_samples(site: Site, html: &str) -> Result<Vec<SamplePair>, SampleParseError> {
    let tokens = tokens::tokenize(html);
    let payloads = Matcher::for_site(site).run(&tokens);
    samples::assemble(payloads)
}

// ── Tests ──
