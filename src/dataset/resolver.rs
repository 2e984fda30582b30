//! Item and subset lookup within a loaded registry

use crate::dataset::{Item, Registry};

impl Registry {
    /// First item whose `name` equals `name`; duplicates resolve to the earliest entry
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Pre-resolved items of the subset `name`
    pub fn find_subset(&self, name: &str) -> Option<&[Item]> {
        self.sets
            .as_ref()
            .and_then(|sets| sets.get(name))
            .map(Vec::as_slice)
    }

    /// Items a listing should show: the named subset when it exists,
    /// otherwise the full flat collection
    pub fn listing_items(&self, set: Option<&str>) -> &[Item] {
        set.and_then(|name| self.find_subset(name))
            .unwrap_or(self.items.as_slice())
    }
}
