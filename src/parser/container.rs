use tracing::debug;

use super::matcher::{SampleKind, SamplePayload};
use super::tokens::{Attribute, Token};

/// `<div class="input"><pre>...</pre></div>` (Codeforces).
#[derive(Debug, Default)]
pub struct ContainerMatcher {
    stack: Vec<(String, Vec<Attribute>)>,
    found: Vec<SamplePayload>,
}

impl ContainerMatcher {
    pub fn consume(&mut self, token: &Token) {
        match token {
            Token::Open { name, attrs } => self.stack.push((name.clone(), attrs.clone())),
            // Assumes well-formed markup; the closed name is not checked.
            Token::Close(_) => {
                self.stack.pop();
            }
            Token::Text(data) => {
                if let Some(kind) = self.enclosing_kind() {
                    debug!("found:\n<div class=\"{}\"> ... <pre>{}</pre> ... </div>", kind, data);
                    self.found.push(SamplePayload::new(kind, data.trim_start()));
                }
            }
        }
    }

    pub fn finish(self) -> Vec<SamplePayload> {
        self.found
    }

    fn enclosing_kind(&self) -> Option<SampleKind> {
        let [.., (outer, outer_attrs), (inner, inner_attrs)] = self.stack.as_slice() else {
            return None;
        };
        if outer != "div" || inner != "pre" || !inner_attrs.is_empty() {
            return None;
        }
        match outer_attrs.as_slice() {
            [(key, Some(class))] if key == "class" => match class.as_str() {
                "input" => Some(SampleKind::Input),
                "output" => Some(SampleKind::Output),
                _ => None,
            },
            _ => None,
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[Token]) -> Vec<SamplePayload> {
        let mut m = ContainerMatcher::default();
        for t in tokens {
            m.consume(t);
        }
        m.finish()
    }

    fn sample(class: &str, pre_attrs: &[(&str, &str)], body: &str) -> Vec<Token> {
        vec![
            Token::open("div", &[("class", class)]),
            Token::open("div", &[("class", "title")]),
            Token::text("Input"),
            Token::close("div"),
            Token::open("pre", pre_attrs),
            Token::text(body),
            Token::close("pre"),
            Token::close("div"),
        ]
    }

    #[test]
    fn input_output_containers() {
        let mut tokens = vec![Token::open("div", &[("class", "sample-test")])];
        tokens.extend(sample("input", &[], "\n1 7 11 5\n"));
        tokens.extend(sample("output", &[], "\nYES\n"));
        tokens.push(Token::close("div"));
        assert_eq!(
            run(&tokens),
            vec![
                SamplePayload::new(SampleKind::Input, "1 7 11 5\n"),
                SamplePayload::new(SampleKind::Output, "YES\n"),
            ]
        );
    }

    #[test]
    fn extra_class_tokens_rejected() {
        let tokens = sample("input sample", &[], "1\n");
        assert!(run(&tokens).is_empty());
    }

    #[test]
    fn extra_container_attribute_rejected() {
        let tokens = vec![
            Token::open("div", &[("class", "input"), ("id", "a")]),
            Token::open("pre", &[]),
            Token::text("1\n"),
        ];
        assert!(run(&tokens).is_empty());
    }

    #[test]
    fn pre_with_attributes_rejected() {
        let tokens = sample("output", &[("class", "x")], "1\n");
        assert!(run(&tokens).is_empty());
    }

    #[test]
    fn pre_must_be_direct_child() {
        let tokens = vec![
            Token::open("div", &[("class", "input")]),
            Token::open("span", &[]),
            Token::open("pre", &[]),
            Token::text("1\n"),
        ];
        assert!(run(&tokens).is_empty());
    }

    #[test]
    fn stray_close_on_empty_stack_is_ignored() {
        let mut tokens = vec![Token::close("div"), Token::close("html")];
        tokens.extend(sample("input", &[], "5\n"));
        assert_eq!(run(&tokens), vec![SamplePayload::new(SampleKind::Input, "5\n")]);
    }
}
