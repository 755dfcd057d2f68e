use std::fmt;

/// Client-side routes, one per view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRoute {
    /// `/`
    Index,
    /// `/create`
    Create,
    /// `/{id}`
    Show(i32),
    /// `/{id}/edit`
    Edit(i32),
    /// `/{id}/delete`
    Delete(i32),
    /// Anything else, keeping the requested path
    NotFound(String),
}

impl ClientRoute {
    /// Resolve a path against the static route table
    ///
    /// Leading and trailing slashes are ignored. Item ids must be positive
    /// integers.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => ClientRoute::Index,
            ["create"] => ClientRoute::Create,
            [id] => parse_id(id).map_or_else(|| not_found(path), ClientRoute::Show),
            [id, "edit"] => parse_id(id).map_or_else(|| not_found(path), ClientRoute::Edit),
            [id, "delete"] => parse_id(id).map_or_else(|| not_found(path), ClientRoute::Delete),
            _ => not_found(path),
        }
    }
}

fn parse_id(segment: &str) -> Option<i32> {
    segment.parse::<i32>().ok().filter(|id| *id > 0)
}

fn not_found(path: &str) -> ClientRoute {
    ClientRoute::NotFound(path.to_string())
}

impl fmt::Display for ClientRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientRoute::Index => write!(f, "/"),
            ClientRoute::Create => write!(f, "/create"),
            ClientRoute::Show(id) => write!(f, "/{}", id),
            ClientRoute::Edit(id) => write!(f, "/{}/edit", id),
            ClientRoute::Delete(id) => write!(f, "/{}/delete", id),
            ClientRoute::NotFound(path) => write!(f, "{}", path),
        }
    }
}
