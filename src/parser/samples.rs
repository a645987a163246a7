use thiserror::Error;

use super::matcher::{SampleKind, SamplePayload};

/// An `(input, output)` pair; its position in the returned list is its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    pub input: Vec<u8>,
    pub output: Vec<u8>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleParseError {
    #[error("no samples found")]
    Empty,
    #[error("an odd number of <pre> found ({0})")]
    OddCount(usize),
    #[error("<pre>...</pre> #{position} is expected to be a sample {expected} but it is a sample {found}")]
    Order {
        position: usize,
        expected: SampleKind,
        found: SampleKind,
    },
}

/// Group payloads two by two, in document order.
pub fn assemble(payloads: Vec<SamplePayload>) -> Result<Vec<SamplePair>, SampleParseError> {
    if payloads.is_empty() {
        return Err(SampleParseError::Empty);
    }
    if payloads.len() % 2 != 0 {
        return Err(SampleParseError::OddCount(payloads.len()));
    }

    let mut pairs = Vec::with_capacity(payloads.len() / 2);
    let mut iter = payloads.into_iter().enumerate();
    while let (Some((i, input)), Some((j, output))) = (iter.next(), iter.next()) {
        expect_kind(i, &input, SampleKind::Input)?;
        expect_kind(j, &output, SampleKind::Output)?;
        pairs.push(SamplePair {
            input: input.bytes,
            output: output.bytes,
        });
    }
    Ok(pairs)
}

fn expect_kind(
    position: usize,
    payload: &SamplePayload,
    expected: SampleKind,
) -> Result<(), SampleParseError> {
    if payload.kind == expected {
        Ok(())
    } else {
        Err(SampleParseError::Order {
            position,
            expected,
            found: payload.kind,
        })
    }
}

// ── Tests ──
