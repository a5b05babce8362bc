//! Part search criteria

use rackstore_core::Part;

/// Conjunctive filter over parts
///
/// Every criterion is optional. `None`, an empty string and an empty tag
/// list all mean "no constraint", so `PartSearchCriteria::default()`
/// matches every part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartSearchCriteria {
    /// Case-insensitive substring of id, name, notes or the space-joined tags
    pub query: Option<String>,
    pub category_id: Option<String>,
    pub manufacturer_id: Option<String>,
    pub drawer_id: Option<String>,
    /// Part carries at least one of these tags
    pub tags_any: Vec<String>,
    /// Part carries every one of these tags
    pub tags_all: Vec<String>,
    /// Inclusive lower bound on quantity
    pub min_quantity: Option<i64>,
    /// Inclusive upper bound on quantity
    pub max_quantity: Option<i64>,
}

impl PartSearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer_id: impl Into<String>) -> Self {
        self.manufacturer_id = Some(manufacturer_id.into());
        self
    }

    pub fn with_drawer(mut self, drawer_id: impl Into<String>) -> Self {
        self.drawer_id = Some(drawer_id.into());
        self
    }

    /// Builder: match parts carrying any of `tags`
    pub fn with_tags_any<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags_any = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: match parts carrying all of `tags`
    pub fn with_tags_all<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags_all = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_quantity(mut self, min: i64) -> Self {
        self.min_quantity = Some(min);
        self
    }

    pub fn with_max_quantity(mut self, max: i64) -> Self {
        self.max_quantity = Some(max);
        self
    }

    /// Whether `part` satisfies every criterion
    pub fn matches(&self, part: &Part) -> bool {
        if !id_matches(self.category_id.as_deref(), &part.category_id)
            || !id_matches(self.manufacturer_id.as_deref(), &part.manufacturer_id)
            || !id_matches(self.drawer_id.as_deref(), &part.drawer_id)
        {
            return false;
        }
        if self.min_quantity.is_some_and(|min| part.quantity < min) {
            return false;
        }
        if self.max_quantity.is_some_and(|max| part.quantity > max) {
            return false;
        }
        if !self.tags_any.is_empty() && !self.tags_any.iter().any(|tag| part.has_tag(tag)) {
            return false;
        }
        if !self.tags_all.iter().all(|tag| part.has_tag(tag)) {
            return false;
        }
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => query_matches(&query.to_lowercase(), part),
            _ => true,
        }
    }
}

fn id_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        Some(id) if !id.is_empty() => id == actual,
        _ => true,
    }
}

fn query_matches(query: &str, part: &Part) -> bool {
    let tags = part.tags.join(" ");
    [
        part.id.as_str(),
        part.name.as_str(),
        part.notes.as_deref().unwrap_or(""),
        tags.as_str(),
    ]
    .iter()
    .any(|text| text.to_lowercase().contains(query))
}
