// Terminal client - routes, views and the HTTP backend they call
pub mod backend;
pub mod errors;
pub mod http_client;
pub mod notify;
pub mod router;
pub mod views;

pub use backend::ItemsBackend;
pub use errors::ClientError;
pub use http_client::HttpItemsClient;
pub use notify::Notification;
pub use router::ClientRoute;
pub use views::{render, ItemForm, Rendered};
