//! Catalog filtering shared by every list screen
//!
//! All list screens narrow a static catalog the same way: a set of
//! predicates combined with logical AND, applied without touching the source
//! and keeping the original order. [`CatalogFilter`] is that predicate list;
//! [`filter_catalog`] builds the common search + category + region filter for
//! anything implementing [`Listing`].

use crate::data::{
    Accommodation, AccommodationType, Destination, DestinationCategory, ExploreCategory,
    ExploreDestination, Guide, GuideCategory, TripRecord, TripStatus,
};

/// Sentinel accepted in text input for "no filter"
pub const ALL: &str = "all";

/// An AND-combination of predicates over `T`
pub struct CatalogFilter<'a, T> {
    predicates: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T> Default for CatalogFilter<'a, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'a, T> CatalogFilter<'a, T> {
    /// A filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary predicate
    pub fn with(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Case-insensitive substring match against any of the given fields.
    /// An empty (or all-whitespace) query matches everything.
    pub fn search(self, query: &str, fields: impl Fn(&T) -> Vec<&str> + 'a) -> Self {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self;
        }
        self.with(move |item| {
            fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
    }

    /// Exact match on one field; `None` means "all" and adds no predicate.
    pub fn equals<V>(self, selected: Option<V>, field: impl Fn(&T) -> V + 'a) -> Self
    where
        V: PartialEq + 'a,
    {
        match selected {
            None => self,
            Some(wanted) => self.with(move |item| field(item) == wanted),
        }
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p(item))
    }

    /// Returns the matching items in their original order
    pub fn apply<'b>(&self, items: &'b [T]) -> Vec<&'b T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// A catalog entry that can be searched and narrowed by category and region
pub trait Listing {
    type Category: Copy + PartialEq;

    fn title(&self) -> &str;
    fn summary(&self) -> &str;
    fn category(&self) -> Self::Category;

    /// Region the entry belongs to, if the catalog has regions
    fn region(&self) -> Option<&str> {
        None
    }
}

/// Search text plus optional category and region selections
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery<C> {
    pub search: String,
    pub category: Option<C>,
    pub region: Option<String>,
}

impl<C> Default for CatalogQuery<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            region: None,
        }
    }
}

/// Filters a listing catalog by search text, category and region.
pub fn filter_catalog<'b, T: Listing>(
    items: &'b [T],
    query: &CatalogQuery<T::Category>,
) -> Vec<&'b T> {
    let region = query.region.clone();
    CatalogFilter::new()
        .search(&query.search, |item: &T| vec![item.title(), item.summary()])
        .equals(query.category, |item: &T| item.category())
        .with(move |item: &T| match &region {
            None => true,
            Some(wanted) => item.region() == Some(wanted.as_str()),
        })
        .apply(items)
}

/// Parses a selector value where [`ALL`] (any case) means no filter.
///
/// Fails with the trimmed input when the value is neither "all" nor accepted
/// by `parse`.
pub fn parse_choice<T>(
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, String> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    parse(trimmed).map(Some).ok_or_else(|| trimmed.to_string())
}

impl Listing for Destination {
    type Category = DestinationCategory;

    fn title(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn category(&self) -> DestinationCategory {
        self.category
    }
}

impl Listing for ExploreDestination {
    type Category = ExploreCategory;

    fn title(&self) -> &str {
        self.name
    }

    fn summary(&self) -> &str {
        self.description
    }

    fn category(&self) -> ExploreCategory {
        self.category
    }

    fn region(&self) -> Option<&str> {
        Some(self.state)
    }
}

/// Guides narrowed by category tab
pub fn filter_guides(guides: &[Guide], category: Option<GuideCategory>) -> Vec<&Guide> {
    CatalogFilter::new()
        .equals(category, |g: &Guide| g.category)
        .apply(guides)
}

/// Accommodations narrowed by type tab
pub fn filter_accommodations(
    stays: &[Accommodation],
    kind: Option<AccommodationType>,
) -> Vec<&Accommodation> {
    CatalogFilter::new()
        .equals(kind, |a: &Accommodation| a.kind)
        .apply(stays)
}

/// Trips with the given status; the trip tabs have no "all" entry
pub fn filter_trips(trips: &[TripRecord], status: TripStatus) -> Vec<&TripRecord> {
    CatalogFilter::new()
        .equals(Some(status), |t: &TripRecord| t.status)
        .apply(trips)
}
