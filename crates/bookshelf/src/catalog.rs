use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{CatalogError, CatalogResult};
use crate::record::Record;

/// An in-memory catalog of literary works.
///
/// Owns an insertion-ordered record sequence, fixed at construction, plus a
/// title index kept in a `BTreeMap` so the sorted key listing and the
/// title-to-record mapping are one structure. Read queries scan `records`;
/// only the index shrinks, via [`Catalog::remove_titles_containing`].
///
/// Duplicate titles in the seed are not rejected: the later record wins in
/// the index while both remain in the sequence.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    records: Vec<Record>,
    index: BTreeMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from a seed sequence, preserving its order.
    ///
    /// Fails with [`CatalogError::InvalidName`] if `name` is empty. An empty
    /// seed is accepted; the aggregate queries then fail with
    /// [`CatalogError::EmptyCatalog`].
    pub fn new(name: impl Into<String>, seed: Vec<Record>) -> CatalogResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::InvalidName);
        }

        let mut index = BTreeMap::new();
        for (pos, record) in seed.iter().enumerate() {
            index.insert(record.title.clone(), pos);
        }

        Ok(Self {
            name,
            records: seed,
            index,
        })
    }

    /// Builds a catalog seeded with the built-in hundred-novel dataset.
    pub fn classics(name: impl Into<String>) -> CatalogResult<Self> {
        Self::new(name, crate::dataset::classic_novels())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct titles currently in the index.
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// Every title uppercased, in record order. The iterator borrows the
    /// catalog; calling again restarts from the first record.
    pub fn all_titles_uppercased(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(|record| record.title.to_uppercase())
    }

    /// Titles containing `substring`, case-insensitively, in record order.
    pub fn titles_containing(&self, substring: &str) -> Vec<&str> {
        let needle = substring.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .map(|record| record.title.as_str())
            .collect()
    }

    /// Titles whose text matches `pattern`, in record order. Case handling
    /// belongs to the pattern (build with `RegexBuilder::case_insensitive`
    /// for the usual report behaviour).
    pub fn titles_matching(&self, pattern: &Regex) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| pattern.is_match(&record.title))
            .map(|record| record.title.as_str())
            .collect()
    }

    /// All titles sorted case-insensitively. Sorts a copy; `records` keeps
    /// its order. The sort is stable, so equal keys keep record order.
    pub fn titles_sorted_alphabetically(&self) -> Vec<&str> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.cmp_by_title(b));
        sorted.into_iter().map(|record| record.title.as_str()).collect()
    }

    /// Titles published in the decade containing `year_hint`: the inclusive
    /// window `[10*(y/10), 10*(y/10)+9]`, division truncating toward zero.
    pub fn titles_in_decade_of(&self, year_hint: i32) -> Vec<&str> {
        let start = (year_hint / 10) * 10;
        let end = start + 9;
        self.records
            .iter()
            .filter(|record| record.year_published >= start && record.year_published <= end)
            .map(|record| record.title.as_str())
            .collect()
    }

    /// The longest title by character count. Ties go to the earliest record.
    pub fn longest_title(&self) -> CatalogResult<&str> {
        self.records
            .iter()
            .reduce(|best, record| {
                if record.title_len() > best.title_len() {
                    record
                } else {
                    best
                }
            })
            .map(|record| record.title.as_str())
            .ok_or(CatalogError::EmptyCatalog)
    }

    /// Whether any record was published in `year`.
    pub fn exists_with_year(&self, year: i32) -> bool {
        self.records
            .iter()
            .any(|record| record.year_published == year)
    }

    /// How many titles contain `word`, case-insensitively.
    pub fn count_containing(&self, word: &str) -> usize {
        let needle = word.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .count()
    }

    /// Percentage (0–100) of records published in `[lower_bound,
    /// upper_bound]` inclusive.
    pub fn percent_between(&self, lower_bound: i32, upper_bound: i32) -> CatalogResult<f64> {
        if self.records.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let matching = self
            .records
            .iter()
            .filter(|record| {
                record.year_published >= lower_bound && record.year_published <= upper_bound
            })
            .count();

        Ok(matching as f64 / self.records.len() as f64 * 100.0)
    }

    /// The record with the earliest publication year. Ties go to the
    /// earliest record in the sequence.
    pub fn oldest(&self) -> CatalogResult<&Record> {
        self.records
            .iter()
            .min_by_key(|record| record.year_published)
            .ok_or(CatalogError::EmptyCatalog)
    }

    /// Records whose title is exactly `length` characters long, in record
    /// order.
    pub fn with_title_length(&self, length: usize) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.title_len() == length)
            .collect()
    }

    /// Titles in sorted-key order, each key resolved through the index to
    /// its record.
    pub fn indexed_titles_in_order(&self) -> impl Iterator<Item = &str> + '_ {
        self.index
            .values()
            .map(|&pos| self.records[pos].title.as_str())
    }

    /// Records in sorted-key order, resolved through the index.
    pub fn indexed_records_in_order(&self) -> impl Iterator<Item = &Record> + '_ {
        self.index.values().map(|&pos| &self.records[pos])
    }

    /// Drops every index entry whose title contains `substring`,
    /// case-insensitively. Returns how many entries were removed. The record
    /// sequence is untouched; only index-based iteration changes.
    pub fn remove_titles_containing(&mut self, substring: &str) -> usize {
        let needle = substring.to_lowercase();
        let before = self.index.len();
        self.index
            .retain(|title, _| !title.to_lowercase().contains(&needle));
        before - self.index.len()
    }
}
