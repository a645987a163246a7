use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::matcher::{SampleKind, SamplePayload};
use super::tokens::Token;

const WINDOW: usize = 4;

static CAPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Sample (Input|Output) ").unwrap());

/// `<h3>Sample Input 1</h3><pre>...</pre>` (AtCoder).
///
/// Only the last four events are ever looked at, so older history is dropped.
#[derive(Debug, Default)]
pub struct HeadingMatcher {
    window: VecDeque<Token>,
    found: Vec<SamplePayload>,
}

impl HeadingMatcher {
    pub fn consume(&mut self, token: &Token) {
        if let Token::Text(data) = token {
            if let Some(kind) = self.caption_kind() {
                debug!("found:\n<h3>{}</h3><pre>{}</pre>", self.caption(), data);
                self.found.push(SamplePayload::new(kind, data));
            }
        }
        if self.window.len() == WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(token.clone());
    }

    pub fn finish(self) -> Vec<SamplePayload> {
        self.found
    }

    fn caption(&self) -> &str {
        match self.window.get(1) {
            Some(Token::Text(caption)) => caption,
            _ => "",
        }
    }

    /// Kind announced by the buffered `h3` caption, if the window holds the idiom.
    fn caption_kind(&self) -> Option<SampleKind> {
        if self.window.len() < WINDOW {
            return None;
        }
        let shape_ok = matches!(&self.window[0], Token::Open { name, attrs } if name == "h3" && attrs.is_empty())
            && matches!(&self.window[1], Token::Text(_))
            && matches!(&self.window[2], Token::Close(name) if name == "h3")
            && matches!(&self.window[3], Token::Open { name, attrs } if name == "pre" && attrs.is_empty());
        if !shape_ok {
            return None;
        }

        let caption = self.caption();
        if !CAPTION_RE.is_match(caption) {
            return None;
        }
        match caption.split_whitespace().nth(1).map(str::to_lowercase).as_deref() {
            Some("input") => Some(SampleKind::Input),
            Some("output") => Some(SampleKind::Output),
            _ => None,
        }
    }
}

// ── Tests ──
