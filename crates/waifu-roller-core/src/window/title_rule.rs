/// Rule recognising the target application's window among all open windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRule {
    /// Substring every candidate title must contain.
    pub marker: String,
    /// Exact title of the bare application window.
    pub canonical_name: String,
    /// Suffix the application appends after the current view, e.g. `"- Discord"`.
    pub canonical_suffix: String,
}

impl TitleRule {
    /// Build a rule from its three markers.
    pub fn new(
        marker: impl Into<String>,
        canonical_name: impl Into<String>,
        canonical_suffix: impl Into<String>,
    ) -> Self {
        Self {
            marker: marker.into(),
            canonical_name: canonical_name.into(),
            canonical_suffix: canonical_suffix.into(),
        }
    }

    /// Whether `title` belongs to the target application.
    pub fn matches(&self, title: &str) -> bool {
        title == self.canonical_name || title.ends_with(&self.canonical_suffix)
    }
}
