use crate::record_type::{RecordType, NSLOOKUP_TYPES, NSLOOKUP_TYPE_COUNT};
use crate::resolver::ResolverId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Resolver-agnostic form of one DoH JSON response.
///
/// Serializes with the DoH JSON field names (`Status`, `TC`, `Answer`, ...)
/// so the gateway output has the same shape whichever upstream answered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CanonicalAnswer {
    #[serde(rename = "Status")]
    pub status: u16,
    #[serde(rename = "TC")]
    pub truncated: bool,
    #[serde(rename = "RD")]
    pub recursion_desired: bool,
    #[serde(rename = "RA")]
    pub recursion_available: bool,
    #[serde(rename = "AD")]
    pub authenticated_data: bool,
    #[serde(rename = "CD")]
    pub checking_disabled: bool,
    #[serde(rename = "Question")]
    pub question: Vec<QuestionEntry>,
    #[serde(rename = "Answer")]
    pub answer: Vec<AnswerRecord>,
    #[serde(rename = "Authority", default, skip_serializing_if = "Vec::is_empty")]
    pub authority: Vec<AnswerRecord>,
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CanonicalAnswer {
    /// NOERROR, regardless of whether the answer section is empty.
    pub fn is_noerror(&self) -> bool {
        self.status == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL")]
    pub ttl_seconds: u32,
    pub data: String,
}

/// An upstream that could not produce a usable answer.
///
/// `status` is the upstream HTTP status, or a synthetic gateway status
/// (502/504) when no HTTP response was received at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Upstream {resolver} failed with HTTP {status}: {status_text}")]
pub struct UpstreamFailure {
    pub resolver: String,
    pub status: u16,
    pub status_text: String,
}

impl UpstreamFailure {
    pub fn new(resolver: impl Into<String>, status: u16, status_text: impl Into<String>) -> Self {
        Self {
            resolver: resolver.into(),
            status,
            status_text: status_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupSlot {
    Answer(CanonicalAnswer),
    Failed(UpstreamFailure),
}

impl LookupSlot {
    pub fn answer(&self) -> Option<&CanonicalAnswer> {
        match self {
            LookupSlot::Answer(a) => Some(a),
            LookupSlot::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&UpstreamFailure> {
        match self {
            LookupSlot::Answer(_) => None,
            LookupSlot::Failed(f) => Some(f),
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, LookupSlot::Answer(_))
    }
}

impl From<Result<CanonicalAnswer, UpstreamFailure>> for LookupSlot {
    fn from(result: Result<CanonicalAnswer, UpstreamFailure>) -> Self {
        match result {
            Ok(answer) => LookupSlot::Answer(answer),
            Err(failure) => LookupSlot::Failed(failure),
        }
    }
}

/// Outcome of an nslookup fan-out: one slot per entry of [`NSLOOKUP_TYPES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub name: Arc<str>,
    pub resolver: ResolverId,
    slots: [LookupSlot; NSLOOKUP_TYPE_COUNT],
}

impl LookupResult {
    pub fn new(
        name: Arc<str>,
        resolver: ResolverId,
        slots: [LookupSlot; NSLOOKUP_TYPE_COUNT],
    ) -> Self {
        Self {
            name,
            resolver,
            slots,
        }
    }

    pub fn get(&self, record_type: RecordType) -> Option<&LookupSlot> {
        record_type.nslookup_slot().map(|idx| &self.slots[idx])
    }

    /// Slots paired with their record type, in [`NSLOOKUP_TYPES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &LookupSlot)> {
        NSLOOKUP_TYPES.iter().copied().zip(self.slots.iter())
    }

    pub fn failed_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_answer()).count()
    }
}
