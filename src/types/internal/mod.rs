// Internal types - not exposed on the wire directly
pub mod field_errors;

pub use field_errors::FieldErrors;
