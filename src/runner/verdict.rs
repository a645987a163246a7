use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ac,
    Wa,
    Re,
    /// Only produced when a time limit is configured.
    Tle,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Ac => "AC",
            Verdict::Wa => "WA",
            Verdict::Re => "RE",
            Verdict::Tle => "TLE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    pub verdict: Verdict,
    /// Output differs only in whitespace. Advisory; the verdict stays WA.
    pub whitespace_only: bool,
}

/// `exit_code` is `None` when the process ended without one (killed by a signal).
pub fn judge(expected: Option<&[u8]>, actual: &[u8], exit_code: Option<i32>) -> Judgement {
    let mut verdict = Verdict::Ac;
    let mut whitespace_only = false;

    if let Some(expected) = expected {
        if actual != expected {
            whitespace_only = words(actual).eq(words(expected));
            verdict = Verdict::Wa;
        }
    }
    if exit_code != Some(0) {
        verdict = Verdict::Re;
    }

    Judgement {
        verdict,
        whitespace_only,
    }
}

fn is_space(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

fn words(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.split(is_space).filter(|w| !w.is_empty())
}

// ── Tests ──
