use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticatedState {
    Ambiguous,
    Authenticated,
    LoggedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticated_state: Option<AuthenticatedState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

impl IdentityItem {
    pub fn new(id: impl Into<String>) -> IdentityItem {
        IdentityItem {
            id: id.into(),
            authenticated_state: None,
            primary: None,
        }
    }
}

/// Identities grouped by namespace. Namespaces serialize in sorted order, items under a
/// namespace in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityMap {
    items: BTreeMap<String, Vec<IdentityItem>>,
}

impl IdentityMap {
    pub fn new() -> IdentityMap {
        IdentityMap::default()
    }

    pub fn add_item(&mut self, namespace: &str, id: &str) {
        self.add_identity_item(namespace, IdentityItem::new(id));
    }

    pub fn add_identity_item(&mut self, namespace: &str, item: IdentityItem) {
        self.items
            .entry(namespace.to_string())
            .or_insert_with(Vec::new)
            .push(item);
    }

    pub fn get_items(&self, namespace: &str) -> Option<&[IdentityItem]> {
        self.items.get(namespace).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
