//! Filter engine.
//!
//! Criteria combine with AND; an absent or blank criterion matches every
//! record. The ingredient term matches either language (OR between the two
//! name fields). Route and dosage form are opaque codes compared exactly.

use iir_model::{Field, FilterCriteria, Record};

/// Positions of the records that passed the current criteria, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    /// A view over every record of a store with `len` records.
    pub fn all(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the view against the records it was computed from.
    pub fn records<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        self.indices.iter().filter_map(move |&idx| records.get(idx))
    }
}

/// Criteria with blanks dropped and free-text terms folded once.
struct Matcher<'c> {
    ingredient: Option<String>,
    route: Option<&'c str>,
    dosage_form: Option<&'c str>,
    cas_number: Option<&'c str>,
    unii: Option<String>,
}

fn non_empty(term: Option<&str>) -> Option<&str> {
    term.filter(|term| !term.is_empty())
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            ingredient: non_empty(criteria.ingredient.as_deref().map(str::trim))
                .map(str::to_lowercase),
            route: non_empty(criteria.route.as_deref()),
            dosage_form: non_empty(criteria.dosage_form.as_deref()),
            cas_number: non_empty(criteria.cas_number.as_deref().map(str::trim)),
            unii: non_empty(criteria.unii.as_deref().map(str::trim)).map(str::to_lowercase),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        if let Some(term) = &self.ingredient {
            let english = record.text(Field::IngredientName).to_lowercase();
            let chinese = record.text(Field::IngredientNameCn).to_lowercase();
            if !english.contains(term.as_str()) && !chinese.contains(term.as_str()) {
                return false;
            }
        }

        if let Some(code) = self.route
            && record.text(Field::Route) != code
        {
            return false;
        }

        if let Some(code) = self.dosage_form
            && record.text(Field::DosageForm) != code
        {
            return false;
        }

        if let Some(term) = self.cas_number
            && !record.text(Field::CasNumber).contains(term)
        {
            return false;
        }

        if let Some(term) = &self.unii
            && !record.text(Field::Unii).to_lowercase().contains(term.as_str())
        {
            return false;
        }

        true
    }
}

/// True when `record` passes every supplied criterion.
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    Matcher::new(criteria).matches(record)
}

/// Evaluate `criteria` against `records`, keeping store order.
pub fn apply_filters(records: &[Record], criteria: &FilterCriteria) -> FilteredView {
    if criteria.is_empty() {
        return FilteredView::all(records.len());
    }
    let matcher = Matcher::new(criteria);
    let indices = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.matches(record))
        .map(|(idx, _)| idx)
        .collect();
    FilteredView { indices }
}
