//! # List View
//!
//! Renders a store's list as navigable entries, one per record, in list order.
//!
//! A [`ListView`] is built in [`ListView::on_init`], which is what a page does when it becomes
//! active: reload the list, then render whatever the store holds. A failed reload does not
//! fail the view. The store keeps its previous list and its error message, so the page shows
//! stale (or empty) content.

use crate::framework::{RemoteResource, ResourceStore, StoreAccess};
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

/// One navigable line of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub href: String,
    pub label: String,
}

impl ListEntry {
    pub fn for_record<R: RemoteResource>(record: &R) -> Self {
        Self {
            href: record.route(),
            label: record.label(),
        }
    }
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<a class="user-list-item" href="{}">{}</a>"#,
            escape(&self.href),
            escape(&self.label)
        )
    }
}

/// Render every record of the store's list, in order.
pub fn render<R: RemoteResource>(store: &ResourceStore<R>) -> Vec<ListEntry> {
    store.list.iter().map(ListEntry::for_record).collect()
}

/// A rendered list together with the store state it was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R: RemoteResource> {
    store: ResourceStore<R>,
    entries: Vec<ListEntry>,
}

impl<R: RemoteResource> ListView<R> {
    /// Reload the list through `client`, then render the resulting store.
    ///
    /// Only a failure to reach the store itself is returned; a failed reload is already
    /// recorded in the store's `error`.
    pub async fn on_init<C>(client: &C) -> Result<Self, C::Error>
    where
        C: StoreAccess<R>,
    {
        if let Err(e) = client.load_list().await {
            debug!(resource = R::NAME, error = %e, "Rendering stale list");
        }
        let store = client.snapshot().await?;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: ResourceStore<R>) -> Self {
        let entries = render(&store);
        Self { store, entries }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn store(&self) -> &ResourceStore<R> {
        &self.store
    }

    /// The store's error message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.store.has_error().then_some(self.store.error.as_str())
    }
}

impl<R: RemoteResource> fmt::Display for ListView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<div class="user-list">"#)?;
        for entry in &self.entries {
            writeln!(f, "  {entry}")?;
        }
        write!(f, "</div>")
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Patient;
    use serde_json::json;

    fn patients(value: serde_json::Value) -> ResourceStore<Patient> {
        ResourceStore {
            list: serde_json::from_value(value).unwrap(),
            ..ResourceStore::new()
        }
    }

    #[test]
    fn test_one_entry_per_record_linking_to_identifier() {
        let store = patients(json!([
            {"public_key": "02aa", "name": "Ada", "surname": "Lovelace"},
            {"public_key": "02bb", "name": "Alan", "surname": "Turing"},
            {"public_key": "02cc", "name": "Grace", "surname": "Hopper"}
        ]));

        let entries = render(&store);
        assert_eq!(entries.len(), 3);
        for (entry, key) in entries.iter().zip(["02aa", "02bb", "02cc"]) {
            assert_eq!(entry.href, format!("/patient/{key}"));
            assert!(entry.label.starts_with(key));
        }
        assert_eq!(entries[1].label, "02bb Alan Turing");
    }

    #[test]
    fn test_empty_store_renders_empty_list() {
        let view = ListView::from_store(ResourceStore::<Patient>::new());
        assert!(view.entries().is_empty());
        assert_eq!(view.error(), None);
        assert_eq!(view.to_string(), "<div class=\"user-list\">\n</div>");
    }

    #[test]
    fn test_display_escapes_markup() {
        let entry = ListEntry {
            href: "/patient/a\"b".to_string(),
            label: "<b>Ada</b> & co".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            r#"<a class="user-list-item" href="/patient/a&quot;b">&lt;b&gt;Ada&lt;/b&gt; &amp; co</a>"#
        );
    }

    #[test]
    fn test_view_renders_entries_and_error() {
        let mut store = patients(json!([{"public_key": "02aa", "name": "Ada", "surname": "L"}]));
        store.error = "Request to http://backend/api/patients failed with status 500".to_string();

        let view = ListView::from_store(store);
        assert_eq!(view.error(), Some("Request to http://backend/api/patients failed with status 500"));
        assert_eq!(
            view.to_string(),
            "<div class=\"user-list\">\n  <a class=\"user-list-item\" href=\"/patient/02aa\">02aa Ada L</a>\n</div>"
        );
    }
}
