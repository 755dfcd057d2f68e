use std::collections::BTreeMap;

/// Validation messages keyed by field name, in field-name order
pub type FieldErrors = BTreeMap<String, Vec<String>>;
