use crate::Quote;
use rand::Rng;
use std::path::Path;
use thiserror::Error;

/// Error type for store load/save operations.
///
/// Out-of-range lookups are not errors; they return `None` or `false`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Format(#[from] serde_json::Error),
}

/// The ordered collection of all quotes, backed by a JSON file.
///
/// A quote's ID is its position in the sequence. Removal splices the vector,
/// so IDs of subsequent quotes shift down by one; IDs are not stable across
/// deletes. The store is the only writer of the persisted file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Load a store from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let quotes: Vec<Quote> = serde_json::from_str(&contents)?;
        Ok(Self { quotes })
    }

    /// Save the full store to a JSON file, pretty-printed.
    ///
    /// Plain overwrite, no atomic rename; a crash mid-write loses the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.quotes)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Get a quote by ID, `None` when out of range.
    pub fn get(&self, id: usize) -> Option<&Quote> {
        self.quotes.get(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut Quote> {
        self.quotes.get_mut(id)
    }

    /// Pick a uniformly random quote, `None` on an empty store.
    pub fn random(&self) -> Option<&Quote> {
        self.random_index().map(|id| &self.quotes[id])
    }

    /// Pick a uniformly random ID, `None` on an empty store.
    pub fn random_index(&self) -> Option<usize> {
        if self.quotes.is_empty() {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..self.quotes.len()))
    }

    /// Append a quote; its ID is the store's previous length.
    pub fn add(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Remove the quote at `id`, shifting later quotes down by one.
    ///
    /// Returns whether the ID was in range.
    pub fn remove(&mut self, id: usize) -> bool {
        if id >= self.quotes.len() {
            return false;
        }
        self.quotes.remove(id);
        true
    }

    /// Replace the quote at `id` in place. Returns whether the ID was in range.
    pub fn update(&mut self, id: usize, quote: Quote) -> bool {
        match self.quotes.get_mut(id) {
            Some(slot) => {
                *slot = quote;
                true
            }
            None => false,
        }
    }

    /// Serialize the full sequence to compact JSON.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.quotes)?)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}
