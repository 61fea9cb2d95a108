//! Free-text category filter.

/// Current contents of the filter input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    text: String,
    /// Uppercased copy of `text`, kept so matching does not re-allocate per point.
    needle: String,
}

impl FilterState {
    pub fn new(text: impl Into<String>) -> Self {
        let mut f = Self::default();
        f.set_text(text);
        f
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.needle = self.text.to_uppercase();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// `true` if a point with this category should be shown.
    pub fn matches(&self, category: &str) -> bool {
        self.needle.is_empty() || category.to_uppercase().contains(&self.needle)
    }
}
