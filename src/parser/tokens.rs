use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    self, BufferQueue, TagKind, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// `(key, value)`. html5ever reports a bare attribute as an empty value, so
/// tokens read from markup always carry `Some`.
pub type Attribute = (String, Option<String>);

/// Structural event of an HTML document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open { name: String, attrs: Vec<Attribute> },
    Close(String),
    Text(String),
}

#[cfg(test)]
impl Token {
    pub fn open(name: &str, attrs: &[(&str, &str)]) -> Self {
        Token::Open {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect(),
        }
    }

    pub fn close(name: &str) -> Self {
        Token::Close(name.to_string())
    }

    pub fn text(content: &str) -> Self {
        Token::Text(content.to_string())
    }
}

/// Collects html5ever tokens, coalescing character runs into one `Text`.
#[derive(Default)]
struct EventSink {
    tokens: RefCell<Vec<Token>>,
    pending: RefCell<String>,
}

impl EventSink {
    fn flush_text(&self) {
        let mut pending = self.pending.borrow_mut();
        if !pending.is_empty() {
            self.tokens
                .borrow_mut()
                .push(Token::Text(std::mem::take(&mut *pending)));
        }
    }

    fn push(&self, token: Token) {
        self.flush_text();
        self.tokens.borrow_mut().push(token);
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: tokenizer::Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            tokenizer::Token::CharacterTokens(text) => {
                self.pending.borrow_mut().push_str(&text);
            }
            tokenizer::Token::NullCharacterToken => {
                self.pending.borrow_mut().push('\0');
            }
            tokenizer::Token::TagToken(tag) => {
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::StartTag => {
                        let attrs = tag
                            .attrs
                            .iter()
                            .map(|a| (a.name.local.to_string(), Some(a.value.to_string())))
                            .collect();
                        self.push(Token::Open {
                            name: name.clone(),
                            attrs,
                        });
                        if tag.self_closing {
                            self.push(Token::Close(name));
                        } else {
                            // The bare tokenizer has no tree builder to switch states for us.
                            match name.as_str() {
                                "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                                "style" => return TokenSinkResult::RawData(RawKind::Rawtext),
                                _ => {}
                            }
                        }
                    }
                    TagKind::EndTag => self.push(Token::Close(name)),
                }
            }
            tokenizer::Token::CommentToken(_) | tokenizer::Token::DoctypeToken(_) => {
                self.flush_text();
            }
            tokenizer::Token::EOFToken => self.flush_text(),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize a whole HTML document.
pub fn tokenize(html: &str) -> Vec<Token> {
    let queue = BufferQueue::default();
    queue.push_back(StrTendril::from_slice(html));

    let tok = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    let _ = tok.feed(&queue);
    tok.end();

    tok.sink.flush_text();
    tok.sink.tokens.take()
}

// ── Tests ──
