//! Share records and the decoded share set consumed by the reconstructor.

use std::num::IntErrorKind;

use crate::error::{Error, Result};
use crate::radix;
use num_bigint::BigInt;
use tracing::{debug, warn};

/// One decoded point (x, y) on the secret-embedding polynomial.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Share identifier, the x-coordinate.
    pub x: BigInt,
    /// Decoded share value, the y-coordinate.
    pub y: BigInt,
}

/// A share as it appears in the input document, before decoding.
/// `base` and `value` are optional because the document may omit them;
/// [`ShareSet::build`] is where a missing field becomes an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawShareRecord {
    pub id: String,
    pub base: Option<u32>,
    pub value: Option<String>,
}

/// The decoded shares plus the scheme parameters, built once from the
/// input document and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    /// Minimum number of shares needed to reconstruct (k).
    pub threshold: usize,
    /// Declared total share count (n). Advisory only: the source format
    /// never promises it matches the records actually present.
    pub total: usize,
    /// Decoded shares in document order.
    pub shares: Vec<Share>,
}

impl ShareSet {
    /// Decode every record and assemble the set.
    ///
    /// Each record's value is decoded at its stated base and its id is
    /// parsed as the base-10 x-coordinate. Duplicate x values are allowed
    /// here; the reconstructor checks uniqueness within the subset it
    /// actually selects, which is where it matters.
    pub fn build(
        records: Vec<RawShareRecord>,
        threshold: usize,
        total: usize,
    ) -> Result<ShareSet> {
        let mut shares = Vec::with_capacity(records.len());
        for record in records {
            let base = record.base.ok_or(Error::MissingField {
                id: record.id.clone(),
                field: "base",
            })?;
            let value = record.value.as_deref().ok_or(Error::MissingField {
                id: record.id.clone(),
                field: "value",
            })?;
            let x = parse_id(&record.id)?;
            let y = BigInt::from(radix::decode(value, base)?);
            debug!(id = %record.id, base, %y, "decoded share");
            shares.push(Share { x, y });
        }
        if shares.len() < threshold {
            return Err(Error::InsufficientShares {
                needed: threshold,
                got: shares.len(),
            });
        }
        if shares.len() != total {
            warn!(
                declared = total,
                actual = shares.len(),
                "share count differs from declared n; n is advisory and ignored"
            );
        }
        Ok(ShareSet {
            threshold,
            total,
            shares,
        })
    }
}

/// Parse a share id as a base-10 integer x-coordinate.
fn parse_id(id: &str) -> Result<BigInt> {
    match id.parse::<i64>() {
        Ok(x) => Ok(BigInt::from(x)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(Error::Overflow),
            _ => Err(Error::MalformedInput(format!(
                "share id {id:?} is not a decimal integer"
            ))),
        },
    }
}
