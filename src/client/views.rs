
use crate::client::{ClientError, ClientRoute, ItemsBackend, Notification};
use crate::types::dto::items::{Item, ItemRequest};
use crate::types::internal::FieldErrors;

/// Output of a view: the text to display and an optional notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    pub notification: Option<Notification>,
}

impl Rendered {
    fn page(body: String) -> Self {
        Self {
            body,
            notification: None,
        }
    }

    fn with_note(body: String, text: &str) -> Self {
        Self {
            body,
            notification: Some(Notification::success(text)),
        }
    }
}

/// Form input supplied to the create and edit views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub title: Option<String>,
    pub comment: Option<String>,
}

impl ItemForm {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.comment.is_none()
    }

    fn to_request(&self) -> ItemRequest {
        ItemRequest {
            title: self.title.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// Render the view for `route`
///
/// `confirm` only affects the delete view.
pub async fn render(
    route: &ClientRoute,
    form: &ItemForm,
    confirm: bool,
    backend: &dyn ItemsBackend,
) -> Rendered {
    match route {
        ClientRoute::Index => index_view(backend).await,
        ClientRoute::Create => create_view(form, backend).await,
        ClientRoute::Show(id) => show_view(*id, backend).await,
        ClientRoute::Edit(id) => edit_view(*id, form, backend).await,
        ClientRoute::Delete(id) => delete_view(*id, confirm, backend).await,
        ClientRoute::NotFound(path) => not_found_view(path),
    }
}

async fn index_view(backend: &dyn ItemsBackend) -> Rendered {
    match backend.list_items().await {
        Ok(items) => Rendered::page(item_list(&items)),
        Err(err) => failure(err),
    }
}

async fn create_view(form: &ItemForm, backend: &dyn ItemsBackend) -> Rendered {
    if form.is_empty() {
        return Rendered::page(item_form("New item", form, &FieldErrors::new()));
    }

    match backend.create_item(&form.to_request()).await {
        Ok(item) => Rendered::with_note(item_detail(&item), "Item created."),
        Err(ClientError::Validation(errors)) => {
            Rendered::page(item_form("New item", form, &errors))
        }
        Err(err) => failure(err),
    }
}

async fn show_view(id: i32, backend: &dyn ItemsBackend) -> Rendered {
    match backend.show_item(id).await {
        Ok(item) => Rendered::page(item_detail(&item)),
        Err(err) => failure(err),
    }
}

async fn edit_view(id: i32, form: &ItemForm, backend: &dyn ItemsBackend) -> Rendered {
    let heading = format!("Edit item #{}", id);

    if form.is_empty() {
        return match backend.show_item(id).await {
            Ok(item) => {
                let prefilled = ItemForm {
                    title: Some(item.title),
                    comment: Some(item.comment),
                };
                Rendered::page(item_form(&heading, &prefilled, &FieldErrors::new()))
            }
            Err(err) => failure(err),
        };
    }

    match backend.update_item(id, &form.to_request()).await {
        Ok(item) => Rendered::with_note(item_detail(&item), "Item updated."),
        Err(ClientError::Validation(errors)) => Rendered::page(item_form(&heading, form, &errors)),
        Err(err) => failure(err),
    }
}

async fn delete_view(id: i32, confirm: bool, backend: &dyn ItemsBackend) -> Rendered {
    if !confirm {
        return match backend.show_item(id).await {
            Ok(item) => {
                let mut body = item_detail(&item);
                body.push_str("\nDelete this item? Run again with --confirm to delete it.");
                Rendered::page(body)
            }
            Err(err) => failure(err),
        };
    }

    match backend.delete_item(id).await {
        Ok(item) => Rendered::with_note(
            format!("Deleted item #{}: {}", item.id, item.title),
            "Item deleted.",
        ),
        Err(err) => failure(err),
    }
}

fn not_found_view(path: &str) -> Rendered {
    Rendered::page(format!("404 - Nothing here: {}\nTry / to list items.", path))
}

/// Map a failed request to a rendered page
///
/// Unknown items get the not-found page; everything without a structured
/// body gets the generic failure notice.
fn failure(err: ClientError) -> Rendered {
    match err {
        ClientError::NotFound(message) => Rendered::page(format!("404 - {}", message)),
        other => {
            tracing::warn!("Request failed: {}", other);
            Rendered {
                body: String::new(),
                notification: Some(Notification::fail()),
            }
        }
    }
}

fn item_list(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items yet. Create one at /create.".to_string();
    }

    let mut out = format!("Items ({})\n", items.len());
    for item in items {
        out.push_str(&format!(
            "\n#{}  {}\n    written {}\n",
            item.id, item.title, item.written_at
        ));
    }
    out
}

fn item_detail(item: &Item) -> String {
    format!(
        "#{} {}\n\n{}\n\nCreated {} ({})\nUpdated {} ({})\n",
        item.id,
        item.title,
        item.comment,
        item.created_date,
        item.written_at,
        item.updated_date,
        item.modified_at,
    )
}

fn item_form(heading: &str, form: &ItemForm, errors: &FieldErrors) -> String {
    let mut out = format!("{}\n", heading);
    for (label, field, value) in [
        ("Title", "title", &form.title),
        ("Comment", "comment", &form.comment),
    ] {
        out.push_str(&format!("\n{}: {}\n", label, value.as_deref().unwrap_or("")));
        for message in errors.get(field).into_iter().flatten() {
            out.push_str(&format!("  ! {}\n", message));
        }
    }
    out
}
