use dohgate_domain::{LookupResult, LookupSlot, UpstreamFailure, NSLOOKUP_TYPE_COUNT};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Error marker stored in place of an answer for a failed record type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SlotError {
    pub error: String,
    pub status: u16,
}

impl From<&UpstreamFailure> for SlotError {
    fn from(failure: &UpstreamFailure) -> Self {
        Self {
            error: failure.to_string(),
            status: failure.status,
        }
    }
}

/// `{"A", "AAAA", "CNAME", "TXT", "NS", "MX"}`, each key holding a DoH
/// answer or a [`SlotError`]. Nothing else is written at the top level.
pub struct LookupResponse(pub LookupResult);

impl Serialize for LookupResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let result = &self.0;
        let mut map = serializer.serialize_map(Some(NSLOOKUP_TYPE_COUNT))?;
        for (record_type, slot) in result.iter() {
            match slot {
                LookupSlot::Answer(answer) => map.serialize_entry(record_type.as_str(), answer)?,
                LookupSlot::Failed(failure) => {
                    map.serialize_entry(record_type.as_str(), &SlotError::from(failure))?
                }
            }
        }
        map.end()
    }
}
