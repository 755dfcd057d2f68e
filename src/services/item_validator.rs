use crate::errors::ItemError;
use crate::types::internal::FieldErrors;

/// Title and comment that passed validation, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    pub title: String,
    pub comment: String,
}

/// Validate the writable item fields
///
/// Both fields are required and must be non-empty after trimming. Every
/// failing field is reported, not just the first one.
///
/// # Returns
/// * `Ok(ValidatedItem)` - Trimmed title and comment
/// * `Err(ItemError::Validation)` - Messages keyed by field name
pub fn validate_item(
    title: Option<&str>,
    comment: Option<&str>,
) -> Result<ValidatedItem, ItemError> {
    let mut errors = FieldErrors::new();

    let title = required("title", title, &mut errors);
    let comment = required("comment", comment, &mut errors);

    match (title, comment) {
        (Some(title), Some(comment)) => Ok(ValidatedItem { title, comment }),
        _ => Err(ItemError::Validation(errors)),
    }
}

fn required(field: &str, value: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
        _ => {
            errors
                .entry(field.to_string())
                .or_default()
                .push(format!("The {} field is required.", field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_are_trimmed() {
        let item = validate_item(Some("  Hello "), Some("World\n")).unwrap();

        assert_eq!(item.title, "Hello");
        assert_eq!(item.comment, "World");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = validate_item(Some(""), Some("x")).unwrap_err();

        match err {
            ItemError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors["title"], vec!["The title field is required.".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_only_comment_is_rejected() {
        let err = validate_item(Some("Title"), Some("   ")).unwrap_err();

        match err {
            ItemError::Validation(errors) => assert!(errors.contains_key("comment")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = validate_item(None, None).unwrap_err();

        match err {
            ItemError::Validation(errors) => {
                let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
                assert_eq!(fields, vec!["comment", "title"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
