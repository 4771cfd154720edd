//! # Resource Store
//!
//! The per-entity cache owned by a [`StoreActor`](crate::framework::StoreActor).

/// In-memory cache for one entity type: the last loaded list, a single current record
/// and the last error message.
///
/// An empty `error` means the last list load or registration succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<R> {
    /// Replaced wholesale on each successful `load_list`.
    pub list: Vec<R>,
    /// Single-slot cache. Overwritten by `load` and `set_current`, posted by `register`.
    pub current: R,
    /// Last error message, empty when there is none.
    pub error: String,
}

impl<R: Default> Default for ResourceStore<R> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            current: R::default(),
            error: String::new(),
        }
    }
}

impl<R: Default> ResourceStore<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R> ResourceStore<R> {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub(crate) fn replace_list(&mut self, list: Vec<R>) {
        self.list = list;
        self.error.clear();
    }

    pub(crate) fn record_error(&mut self, error: &impl std::fmt::Display) {
        self.error = error.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = ResourceStore::<String>::new();
        assert!(store.list.is_empty());
        assert_eq!(store.current, "");
        assert!(!store.has_error());
    }

    #[test]
    fn test_replace_list_clears_error() {
        let mut store = ResourceStore::<u32>::new();
        store.record_error(&"boom");
        assert!(store.has_error());

        store.replace_list(vec![1, 2]);
        assert_eq!(store.list, vec![1, 2]);
        assert_eq!(store.error, "");
    }
}
