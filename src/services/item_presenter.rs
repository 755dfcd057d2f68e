use crate::services::date_formatter::{diff_for_humans, format_datetime, format_iso};
use crate::types::db::item;
use crate::types::dto::items::Item;

/// Project a stored item row into the API read model
///
/// `now` is the reference time for the relative fields, as a Unix
/// timestamp in seconds.
pub fn present(model: &item::Model, now: i64) -> Item {
    Item {
        id: model.id,
        title: model.title.clone(),
        comment: model.comment.clone(),
        created_at: format_iso(model.created_at),
        updated_at: format_iso(model.updated_at),
        written_at: diff_for_humans(model.created_at, now),
        modified_at: diff_for_humans(model.updated_at, now),
        created_date: format_datetime(model.created_at),
        updated_date: format_datetime(model.updated_at),
    }
}

/// Project a list of rows, preserving order
pub fn present_all(models: &[item::Model], now: i64) -> Vec<Item> {
    models.iter().map(|model| present(model, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> item::Model {
        item::Model {
            id: 3,
            title: "Hello".to_string(),
            comment: "World".to_string(),
            created_at: 1_700_000_000,
            updated_at: 1_700_000_180,
        }
    }

    #[test]
    fn test_present_derives_all_fields() {
        let item = present(&sample(), 1_700_000_300);

        assert_eq!(item.id, 3);
        assert_eq!(item.title, "Hello");
        assert_eq!(item.comment, "World");
        assert_eq!(item.created_at, "2023-11-14T22:13:20Z");
        assert_eq!(item.updated_at, "2023-11-14T22:16:20Z");
        assert_eq!(item.created_date, "2023-11-14 22:13:20");
        assert_eq!(item.updated_date, "2023-11-14 22:16:20");
        assert_eq!(item.written_at, "5 minutes ago");
        assert_eq!(item.modified_at, "2 minutes ago");
    }

    #[test]
    fn test_present_is_deterministic_for_fixed_now() {
        assert_eq!(present(&sample(), 1_700_000_300), present(&sample(), 1_700_000_300));
    }

    #[test]
    fn test_present_all_keeps_order() {
        let mut older = sample();
        older.id = 1;
        let items = present_all(&[sample(), older], 1_700_000_300);

        let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
