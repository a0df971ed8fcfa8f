/// Holds the first error reported to it until flushed.
///
/// Meant to be embedded in types under test that record a failure instead
/// of returning one:
///
/// ```
/// use lasso::ErrorSlot;
///
/// let mut slot = ErrorSlot::new();
/// slot.set("disk full");
/// slot.set("disk still full");
/// assert_eq!(slot.get(), "disk full");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    error: Option<String>,
}

impl ErrorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    // Later errors are dropped until the slot is flushed. An empty message
    // is not an error.
    pub fn set(&mut self, error: impl Into<String>) {
        if self.error.is_none() {
            let error = error.into();
            if !error.is_empty() {
                self.error = Some(error);
            }
        }
    }

    /// The held error, or `""` when there is none.
    pub fn get(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    pub fn flush(&mut self) {
        self.error = None;
    }

    pub fn is_set(&self) -> bool {
        self.error.is_some()
    }
}
