use crate::client::{render, ClientRoute, HttpItemsClient, ItemForm, Rendered};
use crate::config::BootstrapSettings;

/// Resolve `path` against the client routes, render its view against the
/// API and print the result
///
/// The page goes to stdout and the notification, if any, to stderr.
pub async fn open_route(
    settings: &BootstrapSettings,
    path: &str,
    form: ItemForm,
    confirm: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let route = ClientRoute::resolve(path);
    let backend = HttpItemsClient::new(settings.api_url());

    tracing::debug!(%route, api_url = settings.api_url(), "Opening client route");

    let Rendered { body, notification } = render(&route, &form, confirm, &backend).await;

    if !body.is_empty() {
        println!("{}", body.trim_end());
    }
    if let Some(notification) = notification {
        eprintln!("{}", notification);
    }

    Ok(())
}
