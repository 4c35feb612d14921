//! Maps upstream DoH JSON onto [`CanonicalAnswer`].
//!
//! Values are copied verbatim: numeric codes and TTLs are not converted and
//! record data strings are not reformatted. Missing sections become empty
//! lists and missing header flags become `false`.

use dohgate_domain::{AnswerRecord, CanonicalAnswer, DohDialect, QuestionEntry};
use serde::Deserialize;
use serde_json::Value;

/// Mapping from one upstream JSON dialect to the canonical answer.
pub trait DialectMapper: Send + Sync {
    fn dialect(&self) -> DohDialect;

    /// Fails with a description when the payload does not have the
    /// dialect's shape.
    fn map(&self, raw: &Value) -> Result<CanonicalAnswer, String>;
}

pub struct DnsJsonMapper;

pub struct GoogleJsonMapper;

static DNS_JSON: DnsJsonMapper = DnsJsonMapper;
static GOOGLE_JSON: GoogleJsonMapper = GoogleJsonMapper;

pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn mapper_for(dialect: DohDialect) -> Option<&'static dyn DialectMapper> {
        match dialect {
            DohDialect::DnsJson => Some(&DNS_JSON),
            DohDialect::GoogleJson => Some(&GOOGLE_JSON),
            DohDialect::DnsMessage => None,
        }
    }

    pub fn supports(dialect: DohDialect) -> bool {
        Self::mapper_for(dialect).is_some()
    }

    pub fn normalize(dialect: DohDialect, raw: &Value) -> Result<CanonicalAnswer, NormalizeError> {
        let mapper = Self::mapper_for(dialect).ok_or(NormalizeError::Unsupported(dialect))?;
        mapper.map(raw).map_err(NormalizeError::Malformed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// No mapper exists for the dialect: the registry and the normalizer
    /// disagree.
    Unsupported(DohDialect),
    /// The payload does not have the dialect's shape.
    Malformed(String),
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "Status")]
    status: u16,
    #[serde(rename = "TC", default)]
    tc: bool,
    #[serde(rename = "RD", default)]
    rd: bool,
    #[serde(rename = "RA", default)]
    ra: bool,
    #[serde(rename = "AD", default)]
    ad: bool,
    #[serde(rename = "CD", default)]
    cd: bool,
    #[serde(rename = "Question", default, deserialize_with = "one_or_many")]
    question: Vec<RawQuestion>,
    #[serde(rename = "Answer", default)]
    answer: Vec<RawRecord>,
    #[serde(rename = "Authority", default)]
    authority: Vec<RawRecord>,
}

#[derive(Deserialize)]
struct RawQuestion {
    name: String,
    #[serde(rename = "type")]
    record_type: u16,
}

#[derive(Deserialize)]
struct RawRecord {
    name: String,
    #[serde(rename = "type")]
    record_type: u16,
    #[serde(rename = "TTL", default)]
    ttl: u32,
    data: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawComment {
    One(String),
    Many(Vec<String>),
}

/// Some upstreams send a single question as an object instead of an array.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<RawQuestion>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(RawQuestion),
        Many(Vec<RawQuestion>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(q) => vec![q],
        OneOrMany::Many(qs) => qs,
    })
}

fn parse_envelope(raw: &Value) -> Result<RawEnvelope, String> {
    if !raw.is_object() {
        return Err("response is not a JSON object".to_string());
    }
    RawEnvelope::deserialize(raw).map_err(|e| e.to_string())
}

fn into_records(raw: Vec<RawRecord>) -> Vec<AnswerRecord> {
    raw.into_iter()
        .map(|r| AnswerRecord {
            name: r.name,
            record_type: r.record_type,
            ttl_seconds: r.ttl,
            data: r.data,
        })
        .collect()
}

fn into_canonical(envelope: RawEnvelope, comment: Option<String>) -> CanonicalAnswer {
    CanonicalAnswer {
        status: envelope.status,
        truncated: envelope.tc,
        recursion_desired: envelope.rd,
        recursion_available: envelope.ra,
        authenticated_data: envelope.ad,
        checking_disabled: envelope.cd,
        question: envelope
            .question
            .into_iter()
            .map(|q| QuestionEntry {
                name: q.name,
                record_type: q.record_type,
            })
            .collect(),
        answer: into_records(envelope.answer),
        authority: into_records(envelope.authority),
        comment,
    }
}

impl DialectMapper for DnsJsonMapper {
    fn dialect(&self) -> DohDialect {
        DohDialect::DnsJson
    }

    fn map(&self, raw: &Value) -> Result<CanonicalAnswer, String> {
        let envelope = parse_envelope(raw)?;
        Ok(into_canonical(envelope, None))
    }
}

impl DialectMapper for GoogleJsonMapper {
    fn dialect(&self) -> DohDialect {
        DohDialect::GoogleJson
    }

    fn map(&self, raw: &Value) -> Result<CanonicalAnswer, String> {
        let envelope = parse_envelope(raw)?;
        let comment = match raw.get("Comment") {
            None | Some(Value::Null) => None,
            Some(value) => match RawComment::deserialize(value).map_err(|e| e.to_string())? {
                RawComment::One(text) => Some(text),
                RawComment::Many(lines) => Some(lines.join(" ")),
            },
        };
        Ok(into_canonical(envelope, comment))
    }
}
