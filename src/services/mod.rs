// Services layer - Time, validation and read-model projection
pub mod clock;
pub mod date_formatter;
pub mod item_presenter;
pub mod item_validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use item_presenter::{present, present_all};
pub use item_validator::{validate_item, ValidatedItem};
