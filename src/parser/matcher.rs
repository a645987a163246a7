use std::fmt;

use super::container::ContainerMatcher;
use super::heading::HeadingMatcher;
use super::tokens::Token;
use super::Site;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Input,
    Output,
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleKind::Input => f.write_str("input"),
            SampleKind::Output => f.write_str("output"),
        }
    }
}

/// One `<pre>` body found by a matcher, tagged with its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePayload {
    pub kind: SampleKind,
    pub bytes: Vec<u8>,
}

impl SamplePayload {
    pub fn new(kind: SampleKind, text: &str) -> Self {
        SamplePayload {
            kind,
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// Bounded-context token matcher, one variant per supported site layout.
pub enum Matcher {
    Heading(HeadingMatcher),
    Container(ContainerMatcher),
}

impl Matcher {
    pub fn for_site(site: Site) -> Self {
        match site {
            Site::AtCoder => Matcher::Heading(HeadingMatcher::default()),
            Site::Codeforces => Matcher::Container(ContainerMatcher::default()),
        }
    }

    pub fn consume(&mut self, token: &Token) {
        match self {
            Matcher::Heading(m) => m.consume(token),
            Matcher::Container(m) => m.consume(token),
        }
    }

    pub fn finish(self) -> Vec<SamplePayload> {
        match self {
            Matcher::Heading(m) => m.finish(),
            Matcher::Container(m) => m.finish(),
        }
    }

    /// Feed a whole token stream and return what was found.
    pub fn run(mut self, tokens: &[Token]) -> Vec<SamplePayload> {
        for token in tokens {
            self.consume(token);
        }
        self.finish()
    }
}
