//! Keyword classification of raw records into item variants.

use crate::domain::items::{ClassifiedItem, PrimePart, Relic};
use crate::domain::model::Record;
use crate::utils::error::{ReliquaryError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static PRIME_PART_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)prime\s?parts?").expect("Invalid PRIME_PART_RE regex"));
static RELIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)relics?").expect("Invalid RELIC_RE regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Primary,
    Secondary,
    Unmatched,
}

/// What to do with a record whose kind matches but whose attributes don't fit the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    #[default]
    Skip,
    Fail,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(MalformedPolicy::Skip),
            "fail" => Ok(MalformedPolicy::Fail),
            _ => Err(format!("Unknown malformed-record policy: {}", s)),
        }
    }
}

/// Prime parts are tested first, so a kind mentioning both is a prime part.
pub fn classify_kind(kind: Option<&str>) -> Classification {
    match kind {
        Some(k) if PRIME_PART_RE.is_match(k) => Classification::Primary,
        Some(k) if RELIC_RE.is_match(k) => Classification::Secondary,
        _ => Classification::Unmatched,
    }
}

pub fn classify(record: &Record, policy: MalformedPolicy) -> Result<Option<ClassifiedItem>> {
    let kind = record.kind();
    let built = match classify_kind(kind) {
        Classification::Primary => PrimePart::from_record(record).map(ClassifiedItem::PrimePart),
        Classification::Secondary => Relic::from_record(record).map(ClassifiedItem::Relic),
        Classification::Unmatched => return Ok(None),
    };

    match built {
        Ok(item) => Ok(Some(item)),
        Err(e) => {
            let kind = kind.unwrap_or_default().to_string();
            match policy {
                MalformedPolicy::Skip => {
                    tracing::warn!("Skipping malformed '{}' record: {}", kind, e);
                    Ok(None)
                }
                MalformedPolicy::Fail => Err(ReliquaryError::MalformedRecord {
                    kind,
                    message: e.to_string(),
                }),
            }
        }
    }
}
