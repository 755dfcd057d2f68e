// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use crate::stores::ItemStore;
use poem::{middleware::Tracing, EndpointExt, Route};
use poem_openapi::OpenApiService;
use std::sync::Arc;

/// Build the HTTP application: JSON API at the root, Swagger UI at `/swagger`
///
/// `server_url` is advertised in the OpenAPI document.
pub fn build_app(item_store: Arc<ItemStore>, server_url: &str) -> impl poem::Endpoint {
    let api_service = OpenApiService::new(
        (HealthApi::new(item_store.clone()), ItemsApi::new(item_store)),
        "Itembook API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(Tracing)
}
