use std::collections::HashMap;

use crate::features::locations::models::{ChildRecord, Record};

/// Ordered rows of one entity type with an id → row lookup.
#[derive(Debug)]
pub struct Table<T> {
    rows: Vec<T>,
    by_id: HashMap<i64, usize>,
    duplicate_ids: usize,
}

impl<T: Record> Table<T> {
    /// Index `rows` in a single pass. On a repeated id the later row wins the
    /// point lookup, but every row stays in the ordered list.
    pub fn new(rows: Vec<T>) -> Self {
        let mut by_id = HashMap::with_capacity(rows.len());
        let mut duplicate_ids = 0;

        for (position, row) in rows.iter().enumerate() {
            if by_id.insert(row.id(), position).is_some() {
                duplicate_ids += 1;
            }
        }

        Self {
            rows,
            by_id,
            duplicate_ids,
        }
    }

    pub fn all(&self) -> &[T] {
        &self.rows
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.by_id.get(&id).and_then(|&pos| self.rows.get(pos))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }
}

/// Parent id → positions of its children in the child table, in load order.
///
/// A parent without children has no entry at all.
#[derive(Debug, Default)]
pub struct ChildIndex {
    by_parent: HashMap<i64, Vec<usize>>,
}

impl ChildIndex {
    pub fn build<T: ChildRecord>(children: &Table<T>) -> Self {
        let mut by_parent: HashMap<i64, Vec<usize>> = HashMap::new();
        for (position, child) in children.all().iter().enumerate() {
            by_parent
                .entry(child.parent_id())
                .or_default()
                .push(position);
        }
        Self { by_parent }
    }

    /// Children of `parent_id`; empty when the parent is unknown or childless.
    pub fn children<'a, T>(&self, parent_id: i64, table: &'a Table<T>) -> Vec<&'a T> {
        self.by_parent
            .get(&parent_id)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&pos| table.rows.get(pos))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn parent_count(&self) -> usize {
        self.by_parent.len()
    }

    /// Number of children whose parent id is missing from `parents`
    pub fn orphans<P>(&self, parents: &Table<P>) -> usize {
        self.by_parent
            .iter()
            .filter(|(parent_id, _)| !parents.by_id.contains_key(parent_id))
            .map(|(_, positions)| positions.len())
            .sum()
    }
}
