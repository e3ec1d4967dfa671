//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{AcronymId, CategoryId, Error};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// A path segment that is not a UUID cannot name a stored record, so it is
/// reported as a lookup miss rather than a malformed request.
fn parse_path_uuid(raw: &str, resource: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::not_found(format!("{resource} {raw} not found")))
}

pub(crate) fn parse_acronym_id(raw: &str) -> Result<AcronymId, Error> {
    parse_path_uuid(raw, "acronym").map(AcronymId::from_uuid)
}

pub(crate) fn parse_category_id(raw: &str) -> Result<CategoryId, Error> {
    parse_path_uuid(raw, "category").map(CategoryId::from_uuid)
}
