//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] paging fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = per_page;
        self
    }
}

/// Paging fields shared by every OpenFEC list endpoint.
pub struct QueryCommon {
    pub page: i64,
    pub per_page: i64,
}

impl Default for QueryCommon {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl QueryCommon {
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", self.page.to_string().as_str())
            .append_pair("per_page", self.per_page.to_string().as_str());
        url
    }
}
