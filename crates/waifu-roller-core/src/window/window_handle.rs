/// Opaque reference to an OS top-level window.
///
/// The title is the one observed when the handle was produced. Focus is never
/// cached; ask the [`crate::WindowSystem`] for the active window instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    raw: isize,
    title: String,
}

impl WindowHandle {
    /// Wrap a platform window id together with its title.
    pub fn new(raw: isize, title: impl Into<String>) -> Self {
        Self {
            raw,
            title: title.into(),
        }
    }

    /// Platform window id.
    pub fn raw(&self) -> isize {
        self.raw
    }

    /// Title at the time the handle was produced.
    pub fn title(&self) -> &str {
        &self.title
    }
}
