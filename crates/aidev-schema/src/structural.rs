//! Required-field checks, the base of the structural tier.

use aidev_core::Finding;
use serde_json::Value;

/// One [`Finding::MissingField`] per name in `fields` that is absent from
/// `document`, in the order given. A key holding `null` counts as present.
/// A non-object document has no fields.
pub fn require_fields<'a>(
    document: &Value,
    fields: impl IntoIterator<Item = &'a str>,
) -> Vec<Finding> {
    fields
        .into_iter()
        .filter(|name| document.get(*name).is_none())
        .map(|name| Finding::MissingField(name.to_string()))
        .collect()
}

/// Check `document` against the `required` list declared by `schema`.
///
/// Only top-level presence is checked; types, nested objects, and every
/// other schema keyword are ignored. Non-string entries in `required` are
/// skipped.
pub fn check_required_fields(document: &Value, schema: &Value) -> Vec<Finding> {
    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str))
        .into_iter()
        .flatten();
    require_fields(document, required)
}
