use std::collections::{BTreeMap, BTreeSet};

use super::model::{Field, SwimDataset, SwimRecord};

// ---------------------------------------------------------------------------
// Selection: one field's user choice
// ---------------------------------------------------------------------------

/// What the user picked for one field: every value, or an explicit set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Explicit(BTreeSet<String>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Explicit(BTreeSet::new())
    }
}

impl Selection {
    /// Concrete set of accepted values. `All` becomes every value in
    /// `universe`; an empty explicit set stays empty and matches nothing.
    pub fn resolve(&self, universe: &[String]) -> BTreeSet<String> {
        match self {
            Selection::All => universe.iter().cloned().collect(),
            Selection::Explicit(set) => set.clone(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Explicit(set) => set.contains(value),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSelection: the five-field predicate
// ---------------------------------------------------------------------------

/// Per-field selection state. Starts with nothing selected anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub swimmers: Selection,
    pub strokes: Selection,
    pub distances: Selection,
    pub phases: Selection,
    pub parameters: Selection,
}

impl FilterSelection {
    pub fn get(&self, field: Field) -> &Selection {
        match field {
            Field::Swimmer => &self.swimmers,
            Field::Stroke => &self.strokes,
            Field::Distance => &self.distances,
            Field::Phase => &self.phases,
            Field::Parameter => &self.parameters,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut Selection {
        match field {
            Field::Swimmer => &mut self.swimmers,
            Field::Stroke => &mut self.strokes,
            Field::Distance => &mut self.distances,
            Field::Phase => &mut self.phases,
            Field::Parameter => &mut self.parameters,
        }
    }

    /// Resolve every `All` against the dataset's distinct values.
    pub fn resolve(&self, dataset: &SwimDataset) -> ResolvedFilter {
        let sets = Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field).resolve(dataset.distinct(field))))
            .collect();
        ResolvedFilter { sets }
    }
}

/// A [`FilterSelection`] with every field reduced to a concrete set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    sets: BTreeMap<Field, BTreeSet<String>>,
}

impl ResolvedFilter {
    pub fn values(&self, field: Field) -> Option<&BTreeSet<String>> {
        self.sets.get(&field)
    }

    /// A record passes when its value for every field is selected.
    pub fn matches(&self, record: &SwimRecord) -> bool {
        Field::ALL.into_iter().all(|field| {
            self.values(field)
                .is_some_and(|set| set.contains(field.value_of(record)))
        })
    }
}

/// Return indices of records that pass all five field filters, in input order.
///
/// A record passes a field filter when its value is in the resolved set for
/// that field. An empty set (nothing selected) fails every record.
pub fn filtered_indices(dataset: &SwimDataset, selection: &FilterSelection) -> Vec<usize> {
    let resolved = selection.resolve(dataset);
    if Field::ALL
        .into_iter()
        .any(|f| resolved.values(f).map_or(true, BTreeSet::is_empty))
    {
        return Vec::new();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| resolved.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::Phase;

    impl FilterSelection {
        /// Everything selected except swimmers.
        fn all_but_swimmers() -> Self {
            FilterSelection {
                swimmers: Selection::default(),
                strokes: Selection::All,
                distances: Selection::All,
                phases: Selection::All,
                parameters: Selection::All,
            }
        }
    }

    fn explicit(values: &[&str]) -> Selection {
        Selection::Explicit(values.iter().map(|v| v.to_string()).collect())
    }

    fn dataset() -> SwimDataset {
        SwimDataset::from_records(
            vec![
                record("A", "Free", "50", Phase::Preliminar, "T TOTAL", Some(30.1)),
                record("A", "Back", "50", Phase::Final, "T TOTAL", Some(33.0)),
                record("B", "Free", "50", Phase::Preliminar, "T TOTAL", Some(29.5)),
                record("B", "Back", "100", Phase::Other("CUARTOS".into()), "V1", None),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn fields_combine_with_and() {
        let ds = dataset();
        let sel = FilterSelection {
            swimmers: explicit(&["A"]),
            strokes: explicit(&["Free"]),
            ..FilterSelection::all_but_swimmers()
        };
        assert_eq!(filtered_indices(&ds, &sel), vec![0]);
    }

    #[test]
    fn select_all_matches_every_value() {
        let ds = dataset();
        let sel = FilterSelection {
            swimmers: Selection::All,
            ..FilterSelection::all_but_swimmers()
        };
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_explicit_selection_matches_nothing() {
        let ds = dataset();
        for field in Field::ALL {
            let mut sel = FilterSelection {
                swimmers: Selection::All,
                ..FilterSelection::all_but_swimmers()
            };
            *sel.get_mut(field) = Selection::default();
            assert!(filtered_indices(&ds, &sel).is_empty(), "{field:?}");
        }
    }

    #[test]
    fn phase_filter_uses_labels() {
        let ds = dataset();
        let sel = FilterSelection {
            swimmers: Selection::All,
            phases: explicit(&["CUARTOS"]),
            ..FilterSelection::all_but_swimmers()
        };
        assert_eq!(filtered_indices(&ds, &sel), vec![3]);
    }

    #[test]
    fn default_selection_means_no_swimmers() {
        let ds = dataset();
        let resolved = FilterSelection::default().resolve(&ds);
        assert_eq!(resolved.values(Field::Swimmer), Some(&BTreeSet::new()));
        assert!(!resolved.matches(&ds.records[0]));
    }
}
