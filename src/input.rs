//! Parsing of the JSON share document.
//!
//! The document is an object with a `"keys"` member holding the scheme
//! parameters and one member per share, keyed by the share's decimal id:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! This module only produces [`RawShareRecord`]s plus the `(n, k)` pair;
//! decoding and reconstruction live elsewhere.

use std::io;

use crate::error::{Error, Result};
use crate::share::{RawShareRecord, ShareSet};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The `"keys"` member. Reference documents write `n` and `k` as JSON
/// numbers, but string forms are accepted too.
#[derive(Debug, Deserialize)]
struct Keys {
    n: IntField,
    k: IntField,
}

/// A field that may arrive as a JSON number or a quoted decimal string
/// (the reference vectors quote `base`, for example).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IntField {
    Num(u64),
    Text(String),
}

impl IntField {
    fn get(&self, name: &str) -> Result<u64> {
        match self {
            IntField::Num(v) => Ok(*v),
            IntField::Text(s) => s.parse().map_err(|_| {
                Error::MalformedInput(format!("field {name:?} is not a non-negative integer"))
            }),
        }
    }
}

/// A parsed share document: scheme parameters plus the raw records,
/// still undecoded.
#[derive(Debug)]
pub struct ShareDocument {
    pub n: u64,
    pub k: u64,
    pub records: Vec<RawShareRecord>,
}

impl ShareDocument {
    pub fn from_str(s: &str) -> Result<ShareDocument> {
        let map: Map<String, Value> = serde_json::from_str(s)
            .map_err(|e| Error::MalformedInput(e.to_string()))?;
        Self::from_map(map)
    }

    pub fn from_reader(r: impl io::Read) -> Result<ShareDocument> {
        let map: Map<String, Value> = serde_json::from_reader(r)
            .map_err(|e| Error::MalformedInput(e.to_string()))?;
        Self::from_map(map)
    }

    fn from_map(mut map: Map<String, Value>) -> Result<ShareDocument> {
        let keys = map
            .remove("keys")
            .ok_or_else(|| Error::MalformedInput("missing \"keys\" object".into()))?;
        let keys: Keys = serde_json::from_value(keys)
            .map_err(|e| Error::MalformedInput(format!("bad \"keys\" object: {e}")))?;
        let n = keys.n.get("n")?;
        let k = keys.k.get("k")?;

        let mut records = Vec::with_capacity(map.len());
        for (id, entry) in map {
            let entry = entry.as_object().ok_or_else(|| {
                Error::MalformedInput(format!("share {id:?} is not an object"))
            })?;
            let base = match entry.get("base") {
                None => None,
                Some(v) => Some(parse_base(&id, v)?),
            };
            let value = match entry.get("value") {
                None => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(_) => {
                    return Err(Error::MalformedInput(format!(
                        "share {id:?} has a non-string value"
                    )))
                }
            };
            records.push(RawShareRecord { id, base, value });
        }
        Ok(ShareDocument { n, k, records })
    }

    /// Decode the records into a [`ShareSet`] ready for reconstruction.
    pub fn into_share_set(self) -> Result<ShareSet> {
        ShareSet::build(self.records, self.k as usize, self.n as usize)
    }
}

fn parse_base(id: &str, v: &Value) -> Result<u32> {
    let base = match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse::<u64>().ok(),
        _ => None,
    }
    .ok_or_else(|| Error::MalformedInput(format!("share {id:?} has a non-integer base")))?;
    u32::try_from(base).map_err(|_| Error::Overflow)
}
