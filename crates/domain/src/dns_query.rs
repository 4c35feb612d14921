use crate::errors::DomainError;
use crate::record_type::RecordType;
use crate::validators::validate_domain_name;
use std::sync::Arc;

/// One DoH question: a name, a record type and the two header flags the
/// JSON API exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub name: Arc<str>,
    pub record_type: RecordType,
    /// DO bit: ask the upstream for DNSSEC records.
    pub dnssec_requested: bool,
    /// CD bit: ask the upstream to skip DNSSEC validation.
    pub validation_disabled: bool,
}

impl QuerySpec {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Result<Self, DomainError> {
        let name = name.into();
        validate_domain_name(&name).map_err(DomainError::MalformedQuery)?;
        Ok(Self {
            name,
            record_type,
            dnssec_requested: false,
            validation_disabled: false,
        })
    }

    /// Builds a spec from raw request parameters; a missing type means `A`.
    pub fn parse(
        name: &str,
        record_type: Option<&str>,
        dnssec_requested: bool,
        validation_disabled: bool,
    ) -> Result<Self, DomainError> {
        let record_type = match record_type.map(str::trim) {
            None | Some("") => RecordType::default(),
            Some(raw) => raw.parse()?,
        };
        Ok(Self::new(name, record_type)?.with_flags(dnssec_requested, validation_disabled))
    }

    pub fn with_flags(mut self, dnssec_requested: bool, validation_disabled: bool) -> Self {
        self.dnssec_requested = dnssec_requested;
        self.validation_disabled = validation_disabled;
        self
    }

    /// Same name and flags, different record type. The name was already
    /// validated, so this cannot fail.
    pub fn for_type(&self, record_type: RecordType) -> Self {
        Self {
            record_type,
            ..self.clone()
        }
    }
}
