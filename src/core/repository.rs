use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::core::models::{BaseEntity, Student};
use crate::core::types::Sort;

struct FilterSorter<'a, T: BaseEntity> {
    filters: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
    cmp: Option<Box<dyn Fn(&T, &T) -> Ordering + 'a>>,
}

impl<'a, T: BaseEntity> FilterSorter<'a, T> {
    fn new() -> Self {
        Self {
            filters: Vec::new(),
            cmp: None,
        }
    }

    fn push_filter(mut self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.filters.push(Box::new(pred));
        self
    }

    fn with_cmp(mut self, cmp: impl Fn(&T, &T) -> Ordering + 'a) -> Self {
        self.cmp = Some(Box::new(cmp));
        self
    }

    fn apply<'r>(&self, items: &'r HashMap<String, T>) -> Vec<&'r T> {
        let mut out: Vec<&T> = items
            .values()
            .filter(|e| self.filters.iter().all(|f| f(e)))
            .collect();

        if let Some(cmp) = &self.cmp {
            out.sort_by(|a, b| cmp(a, b));
        }
        out
    }
}

/// In-memory store keyed by each entity's key. Inserting an existing key replaces the record.
#[derive(Debug)]
pub struct Repository<T: BaseEntity> {
    items: HashMap<String, T>,
}

impl<T: BaseEntity> Default for Repository<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<T: BaseEntity> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, entity: T) -> &T {
        match self.items.entry(entity.key().to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(entity);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entity),
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.get(key)
    }
}

pub type StudentRepository = Repository<Student>;

impl Repository<Student> {
    /// Every record, ordered by `sort`.
    pub fn values(&self, sort: Sort) -> Vec<&Student> {
        Self::sorter(sort).apply(&self.items)
    }

    /// Records whose average is strictly below `threshold`, ordered by `sort`.
    pub fn filter_by_average(&self, threshold: f64, sort: Sort) -> Vec<&Student> {
        Self::sorter(sort)
            .push_filter(move |s: &Student| s.average() < threshold)
            .apply(&self.items)
    }

    fn sorter<'a>(sort: Sort) -> FilterSorter<'a, Student> {
        let fs = FilterSorter::new();
        match sort {
            Sort::Unordered => fs,
            Sort::NameAsc => fs.with_cmp(|a: &Student, b: &Student| a.name.cmp(&b.name)),
            Sort::AverageAsc => fs.with_cmp(|a: &Student, b: &Student| {
                a.average()
                    .total_cmp(&b.average())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
    }
}
