use std::ops::Index;

use crate::ident::RefCon;

use super::item::ListItem;

/// A list row: cells indexed by column id, plus the identity token.
///
/// Two rows are equal when their refcons are equal; the cells do not take
/// part in the comparison.
#[derive(Debug, Clone)]
pub struct ListRow {
    items: Vec<ListItem>,
    refcon: RefCon,
    /// Insertion order. Assigned on first insertion and kept on upsert.
    seq: u32,
}

impl ListRow {
    pub fn new<I, T>(refcon: RefCon, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        Self { items: items.into_iter().map(Into::into).collect(), refcon, seq: 0 }
    }

    #[inline]
    pub fn refcon(&self) -> RefCon {
        self.refcon
    }

    #[inline]
    pub fn seq(&self) -> u32 {
        self.seq
    }

    pub(crate) fn set_seq(&mut self, seq: u32) {
        self.seq = seq;
    }

    #[inline]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, col: usize) -> Option<&ListItem> {
        self.items.get(col)
    }

    /// Changing a sorted column's value does not re-sort; upsert the row
    /// instead if order matters.
    pub fn get_mut(&mut self, col: usize) -> Option<&mut ListItem> {
        self.items.get_mut(col)
    }

    pub(crate) fn items_mut(&mut self) -> &mut [ListItem] {
        &mut self.items
    }
}

impl PartialEq for ListRow {
    fn eq(&self, other: &Self) -> bool {
        self.refcon == other.refcon
    }
}

impl Eq for ListRow {}

impl Index<usize> for ListRow {
    type Output = ListItem;

    fn index(&self, col: usize) -> &ListItem {
        &self.items[col]
    }
}
