//! Query options for list requests.
//!
//! [`RequestOptions`] is an ordered mapping of query parameters. The order
//! in which options are rendered is fixed: `pageSize`, then `pageNumber`,
//! then `fields=_all_` when the all-fields flag is set, then any extra
//! parameters in insertion order. Values are rendered verbatim, with no
//! additional URL encoding.

/// Ordered query options for a list request.
///
/// # Example
///
/// ```rust
/// use tableau_api::RequestOptions;
///
/// let options = RequestOptions::new().page_size(100).page_number(2);
///
/// assert_eq!(
///     options.query_params(),
///     vec![
///         ("pageSize".to_string(), "100".to_string()),
///         ("pageNumber".to_string(), "2".to_string()),
///     ],
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    page_size: Option<u32>,
    page_number: Option<u32>,
    all_fields: bool,
    extra: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of entities returned per page.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the 1-based page to return.
    #[must_use]
    pub const fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Requests every available field in the response (`fields=_all_`).
    #[must_use]
    pub const fn all_fields(mut self, all_fields: bool) -> Self {
        self.all_fields = all_fields;
        self
    }

    /// Appends an arbitrary query parameter.
    ///
    /// Extra parameters keep their insertion order and are rendered after
    /// the paging parameters. The key and value are rendered verbatim.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tableau_api::RequestOptions;
    ///
    /// let options = RequestOptions::new().param("filter", "name:eq:jane");
    ///
    /// assert_eq!(
    ///     options.query_params(),
    ///     vec![("filter".to_string(), "name:eq:jane".to_string())],
    /// );
    /// ```
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Sets the all-fields flag in place.
    ///
    /// This is the mutating form used by
    /// [`Resource::apply_default_options`](crate::endpoints::Resource::apply_default_options).
    pub fn set_all_fields(&mut self, all_fields: bool) {
        self.all_fields = all_fields;
    }

    /// Renders the options as `(key, value)` pairs in query order.
    #[must_use]
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(3 + self.extra.len());
        if let Some(page_size) = self.page_size {
            params.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(page_number) = self.page_number {
            params.push(("pageNumber".to_string(), page_number.to_string()));
        }
        if self.all_fields {
            params.push(("fields".to_string(), "_all_".to_string()));
        }
        params.extend(self.extra.iter().cloned());
        params
    }
}
