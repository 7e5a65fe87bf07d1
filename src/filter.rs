use serde::{Deserialize, Serialize};

use crate::models::{DiveEntry, FishingType};

/// Criteria for narrowing a dive log. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub date_from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub date_to: Option<String>,
    pub location: Option<String>,
    pub fishing_type: Option<FishingType>,
    /// `Some(0.0)` is an active bound, not "unset"; it keeps every valid entry
    pub min_depth: Option<f64>,
    pub max_depth: Option<f64>,
    pub min_rating: Option<u8>,
    /// Free text matched against location, notes and catch species
    pub search: Option<String>,
}

impl FilterOptions {
    pub fn is_active(&self) -> bool {
        let text_set = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.trim().is_empty());

        text_set(&self.date_from)
            || text_set(&self.date_to)
            || text_set(&self.location)
            || text_set(&self.search)
            || self.fishing_type.is_some()
            || self.min_depth.is_some()
            || self.max_depth.is_some()
            || self.min_rating.is_some()
    }

    pub fn matches(&self, entry: &DiveEntry) -> bool {
        if let Some(term) = non_blank(&self.search) {
            let term = term.to_lowercase();
            let hit = contains_ci(&entry.location, &term)
                || contains_ci(&entry.notes, &term)
                || entry.catches.iter().any(|c| contains_ci(&c.species, &term));
            if !hit {
                return false;
            }
        }

        // ISO dates order lexicographically
        if let Some(from) = non_blank(&self.date_from) {
            if entry.date.as_str() < from {
                return false;
            }
        }
        if let Some(to) = non_blank(&self.date_to) {
            if entry.date.as_str() > to {
                return false;
            }
        }

        if let Some(location) = non_blank(&self.location) {
            if !contains_ci(&entry.location, &location.to_lowercase()) {
                return false;
            }
        }

        if let Some(kind) = self.fishing_type {
            if entry.fishing_type != kind {
                return false;
            }
        }

        if let Some(min) = self.min_depth {
            if entry.depth < min {
                return false;
            }
        }
        if let Some(max) = self.max_depth {
            if entry.depth > max {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            match entry.rating {
                Some(rating) if rating >= min => {}
                _ => return false,
            }
        }

        true
    }
}

/// Entries matching `filters`, in their original order.
pub fn filter_entries<'a>(
    entries: &'a [DiveEntry],
    filters: &FilterOptions,
) -> Vec<&'a DiveEntry> {
    entries.iter().filter(|e| filters.matches(e)).collect()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
