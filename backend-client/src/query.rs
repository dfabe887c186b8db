//! Query filters understood by the backend's list endpoints.

/// Filters for `GET /projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Only featured projects. The backend ignores anything but `true`.
    pub featured: bool,
    pub category: Option<String>,
}

impl ProjectQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.featured {
            pairs.push(("featured", "true".to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}

/// Filters and paging for `GET /blogs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    /// 1-based page number; the backend defaults to 1.
    pub page: Option<u32>,
    /// Page size; the backend defaults to 10.
    pub limit: Option<u32>,
}

impl BlogQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Append URL-encoded query pairs to an endpoint path.
pub fn with_query(endpoint: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return endpoint.to_string();
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    format!("{endpoint}?{}", serializer.finish())
}

/// `/<collection>/<segment>` with the segment percent-encoded.
pub fn item_path(collection: &str, segment: &str) -> String {
    format!("/{collection}/{}", urlencoding::encode(segment))
}
