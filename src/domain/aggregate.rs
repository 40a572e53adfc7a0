use chrono::{DateTime, Utc};

use super::summary::UserSummary;

/// Per-user cumulative quantities keyed by category
///
/// Preserves the order categories were first seen for the user: the
/// tie-break in `top` scans that order and takes the first maximal entry,
/// so iteration order is part of the observable output. Category
/// cardinality per user is small, so a linear scan over an ordered vector
/// is sufficient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, u64)>,
}

impl CategoryTotals {
    /// Accumulate a quantity under a category, inserting it on first sight
    pub fn add(&mut self, category: &str, quantity: u32) {
        if let Some((_, total)) = self.entries.iter_mut().find(|(name, _)| name == category) {
            *total += u64::from(quantity);
        } else {
            self.entries.push((category.to_string(), u64::from(quantity)));
        }
    }

    /// First category attaining the maximum total, in insertion order
    ///
    /// Returns None when nothing has been accumulated.
    pub fn top(&self) -> Option<&str> {
        let mut best: Option<(&str, u64)> = None;
        for (name, total) in &self.entries {
            match best {
                Some((_, best_total)) if *total <= best_total => {}
                _ => best = Some((name.as_str(), *total)),
            }
        }
        best.map(|(name, _)| name)
    }

    /// Sum of quantities across all categories
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|(_, total)| *total).sum()
    }

    /// Cumulative total for one category, zero if never seen
    pub fn get(&self, category: &str) -> u64 {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running aggregate for one user, built while scanning cart entries
#[derive(Debug, Clone)]
pub struct UserAggregate {
    last_added: DateTime<Utc>,
    totals: CategoryTotals,
}

impl UserAggregate {
    /// Start an aggregate from the first entry seen for this user
    pub fn new(first_date: DateTime<Utc>) -> Self {
        Self {
            last_added: first_date,
            totals: CategoryTotals::default(),
        }
    }

    /// Track the latest entry date; an equal date keeps the recorded one
    pub fn observe_date(&mut self, date: DateTime<Utc>) {
        if date > self.last_added {
            self.last_added = date;
        }
    }

    /// Accumulate one cart line's quantity under its resolved category
    pub fn add_quantity(&mut self, category: &str, quantity: u32) {
        self.totals.add(category, quantity);
    }

    pub fn last_added(&self) -> DateTime<Utc> {
        self.last_added
    }

    pub fn totals(&self) -> &CategoryTotals {
        &self.totals
    }

    /// Project into the output record
    ///
    /// Returns None when no cart line ever resolved a category for this
    /// user, since a top category is undefined there.
    pub fn into_summary(self, user_id: u64) -> Option<UserSummary> {
        let top_category = self.totals.top()?.to_string();
        Some(UserSummary {
            user_id,
            last_added_date: self.last_added.date_naive(),
            top_category,
        })
    }
}
