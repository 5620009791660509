use crate::models::{ListingCandidate, SearchQuery};

/// The user-supplied predicates of a listing search, ANDed together.
///
/// Each predicate is a no-op when its query field was absent. Predicates
/// run cheapest-first: price and flag checks before the category scan,
/// free-text containment last.
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    price_min: Option<f64>,
    price_max: Option<f64>,
    category_ids: Vec<i64>,
    is_halal: Option<bool>,
    text: Option<String>,
}

impl ListingFilters {
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            price_min: query.price_min,
            price_max: query.price_max,
            category_ids: query.category_ids.clone(),
            is_halal: query.is_halal,
            // Lowercased once here so the per-candidate check is a plain scan.
            text: query.text.as_ref().map(|t| t.to_lowercase()),
        }
    }

    #[inline]
    pub fn matches(&self, listing: &ListingCandidate) -> bool {
        if let Some(min) = self.price_min {
            if listing.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if listing.price > max {
                return false;
            }
        }

        if let Some(halal) = self.is_halal {
            if listing.is_halal != halal {
                return false;
            }
        }

        // OR semantics within the category set: one shared id is enough.
        if !self.category_ids.is_empty()
            && !listing
                .category_ids
                .iter()
                .any(|id| self.category_ids.contains(id))
        {
            return false;
        }

        if let Some(needle) = &self.text {
            let in_title = listing.title.to_lowercase().contains(needle);
            let in_description = listing
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle));
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }
}
