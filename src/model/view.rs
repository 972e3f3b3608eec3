// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Derived country list management.
//!
//! [`compute`] is the pure reducer turning the source list, filter word,
//! criteria and sort order into the list that is rendered. [`ViewState`] owns
//! those four inputs and re-runs the reducer after every mutation, so the
//! derived list can never drift from its inputs.

use tracing::debug;

use crate::model::{
    Country, FilterableField, SortOrder,
    filter::{FilterCriteria, FilterCriteriaCursor},
};

/// Filters then sorts the source list.
///
/// Returns `None` while the source list has not arrived. Filtering keeps the
/// source order; sorting by population is stable, so countries with equal
/// population keep their relative order.
pub(crate) fn compute(
    raw_countries: Option<&[Country]>,
    filter_word: &str,
    criteria: &FilterCriteria,
    order: SortOrder,
) -> Option<Vec<Country>> {
    let raw_countries = raw_countries?;

    let mut derived = criteria.matching(filter_word, raw_countries);

    match order {
        SortOrder::Ascending => derived.sort_by(|a, b| a.population.cmp(&b.population)),
        SortOrder::Descending => derived.sort_by(|a, b| b.population.cmp(&a.population)),
        SortOrder::None => {}
    }

    Some(derived)
}

pub(crate) struct ViewState {
    raw_countries: Option<Vec<Country>>,
    filter_word: String,
    cursor: FilterCriteriaCursor,
    criteria: FilterCriteria,
    order: SortOrder,
    derived: Option<Vec<Country>>,
}

impl ViewState {
    pub(crate) fn new() -> Self {
        let cursor = FilterCriteriaCursor::new();
        Self {
            raw_countries: None,
            filter_word: String::new(),
            cursor,
            criteria: cursor.current_criteria(),
            order: SortOrder::None,
            derived: None,
        }
    }

    pub(crate) fn derived(&self) -> Option<&[Country]> {
        self.derived.as_deref()
    }

    pub(crate) fn total_count(&self) -> Option<usize> {
        self.raw_countries.as_ref().map(Vec::len)
    }

    pub(crate) fn filter_word(&self) -> &str {
        &self.filter_word
    }

    pub(crate) fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub(crate) fn field(&self) -> FilterableField {
        self.criteria.field
    }

    pub(crate) fn order(&self) -> SortOrder {
        self.order
    }

    pub(crate) fn set_countries(&mut self, countries: Vec<Country>) {
        self.raw_countries = Some(countries);
        self.recompute();
    }

    pub(crate) fn set_filter_word(&mut self, word: &str) {
        if self.filter_word != word {
            self.filter_word = word.to_string();
            self.recompute();
        }
    }

    /// Clears the filter word, leaving the criteria and order untouched.
    pub(crate) fn clear_filter_word(&mut self) {
        self.set_filter_word("");
    }

    pub(crate) fn rotate_forward(&mut self) {
        let field = self.cursor.rotate_forward();
        self.field_changed(field);
    }

    pub(crate) fn rotate_backward(&mut self) {
        let field = self.cursor.rotate_backward();
        self.field_changed(field);
    }

    pub(crate) fn set_field(&mut self, field: FilterableField) {
        let field = self.cursor.set_field(field);
        self.field_changed(field);
    }

    pub(crate) fn set_order(&mut self, order: SortOrder) {
        if self.order != order {
            debug!(?order, "sort order changed");
            self.order = order;
            self.recompute();
        }
    }

    // A filter word is scoped to its field, so every field change drops it.
    fn field_changed(&mut self, field: FilterableField) {
        debug!(%field, "filter field changed");
        self.criteria = self.cursor.current_criteria();
        self.filter_word.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.derived = compute(
            self.raw_countries.as_deref(),
            &self.filter_word,
            &self.criteria,
            self.order,
        );
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::fixtures::{alpha3_codes, country, sample_countries};

    fn loaded() -> ViewState {
        let mut view = ViewState::new();
        view.set_countries(sample_countries());
        view
    }

    fn first_alpha3(view: &ViewState) -> &str {
        view.derived().and_then(|d| d.first()).map(|c| c.alpha3_code.as_str()).unwrap_or("")
    }

    #[test]
    fn derived_is_absent_until_countries_arrive() {
        let mut view = ViewState::new();
        view.set_filter_word("f");
        view.set_order(SortOrder::Descending);
        assert!(view.derived().is_none());

        view.set_countries(sample_countries());
        assert_eq!(alpha3_codes(view.derived().unwrap()), ["RUS", "FRA"]);
    }

    #[test]
    fn default_state_shows_source_order() {
        let view = loaded();
        assert_eq!(alpha3_codes(view.derived().unwrap()), ["FRA", "RUS", "BEL", "GGY"]);
        assert_eq!(view.field(), FilterableField::Name);
        assert_eq!(view.order(), SortOrder::None);
        assert_eq!(view.filter_word(), "");
    }

    #[test]
    fn sorting_scenario() {
        let mut view = loaded();
        assert_eq!(first_alpha3(&view), "FRA");

        view.set_order(SortOrder::Ascending);
        assert_eq!(first_alpha3(&view), "GGY");

        view.set_order(SortOrder::Descending);
        assert_eq!(first_alpha3(&view), "RUS");

        view.set_order(SortOrder::None);
        assert_eq!(first_alpha3(&view), "FRA");
    }

    #[test]
    fn filtering_narrows_as_the_word_grows() {
        let mut view = loaded();
        view.set_filter_word("f");
        assert_eq!(alpha3_codes(view.derived().unwrap()), ["FRA", "RUS"]);

        view.set_filter_word("fr");
        assert_eq!(alpha3_codes(view.derived().unwrap()), ["FRA"]);
    }

    #[test]
    fn clearing_the_word_keeps_criteria_and_order() {
        let mut view = loaded();
        view.set_field(FilterableField::Alpha2Code);
        view.set_order(SortOrder::Ascending);
        view.set_filter_word("f");
        assert_eq!(alpha3_codes(view.derived().unwrap()), ["FRA"]);

        view.clear_filter_word();
        assert_eq!(view.field(), FilterableField::Alpha2Code);
        assert_eq!(view.order(), SortOrder::Ascending);
        assert_eq!(alpha3_codes(view.derived().unwrap()), ["GGY", "BEL", "FRA", "RUS"]);
    }

    #[test]
    fn every_field_change_clears_the_word() {
        let mut view = loaded();

        view.set_filter_word("fr");
        view.rotate_forward();
        assert_eq!(view.filter_word(), "");
        assert_eq!(view.derived().unwrap().len(), 4);

        view.set_filter_word("gg");
        view.rotate_backward();
        assert_eq!(view.filter_word(), "");

        view.set_filter_word("x");
        view.set_field(FilterableField::Currencies);
        assert_eq!(view.filter_word(), "");
        assert_eq!(view.criteria().field, FilterableField::Currencies);
        assert_eq!(view.derived().unwrap().len(), 4);
    }

    #[test]
    fn reported_field_is_the_one_being_matched() {
        let mut view = loaded();
        view.rotate_backward();
        assert_eq!(view.field(), FilterableField::Currencies);

        view.set_filter_word("EUR");
        assert_eq!(view.field(), view.criteria().field);
        assert_eq!(alpha3_codes(view.derived().unwrap()), ["FRA", "BEL"]);
        assert!(view.criteria().prompt_text.contains("by currencies"));
    }

    #[test]
    fn sort_survives_filtering_in_either_order() {
        let mut sorted_first = loaded();
        sorted_first.set_order(SortOrder::Descending);
        sorted_first.set_filter_word("f");

        let mut filtered_first = loaded();
        filtered_first.set_filter_word("f");
        filtered_first.set_order(SortOrder::Descending);

        assert_eq!(first_alpha3(&sorted_first), "RUS");
        assert_eq!(sorted_first.derived(), filtered_first.derived());
    }

    #[test]
    fn equal_populations_keep_source_order() {
        let countries = vec![
            country("Alpha", "AA", "AAA", 10, "", &[], &[]),
            country("Bravo", "BB", "BBB", 5, "", &[], &[]),
            country("Charlie", "CC", "CCC", 10, "", &[], &[]),
            country("Delta", "DD", "DDD", 5, "", &[], &[]),
        ];
        let criteria = FilterCriteriaCursor::new().current_criteria();

        let ascending = compute(Some(countries.as_slice()), "", &criteria, SortOrder::Ascending).unwrap();
        assert_eq!(alpha3_codes(&ascending), ["BBB", "DDD", "AAA", "CCC"]);

        let descending = compute(Some(countries.as_slice()), "", &criteria, SortOrder::Descending).unwrap();
        assert_eq!(alpha3_codes(&descending), ["AAA", "CCC", "BBB", "DDD"]);
    }

    fn arb_countries() -> impl Strategy<Value = Vec<Country>> {
        prop::collection::vec((0u64..1_000, "[a-z]{1,8}"), 1..40).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (population, name))| {
                    let alpha3 = format!("{i:03}");
                    country(&name, "XX", &alpha3, population, "", &[], &[])
                })
                .collect()
        })
    }

    fn arb_order() -> impl Strategy<Value = SortOrder> {
        prop_oneof![
            Just(SortOrder::Ascending),
            Just(SortOrder::Descending),
            Just(SortOrder::None),
        ]
    }

    proptest! {
        #[test]
        fn empty_word_without_order_is_identity(countries in arb_countries()) {
            let criteria = FilterCriteriaCursor::new().current_criteria();
            let derived = compute(Some(countries.as_slice()), "", &criteria, SortOrder::None).unwrap();
            prop_assert_eq!(derived, countries);
        }

        #[test]
        fn ascending_is_non_decreasing(countries in arb_countries(), word in "[a-z]?") {
            let criteria = FilterCriteriaCursor::new().current_criteria();
            let derived = compute(Some(countries.as_slice()), &word, &criteria, SortOrder::Ascending).unwrap();
            prop_assert!(derived.windows(2).all(|w| w[0].population <= w[1].population));
        }

        #[test]
        fn descending_is_non_increasing(countries in arb_countries(), word in "[a-z]?") {
            let criteria = FilterCriteriaCursor::new().current_criteria();
            let derived = compute(Some(countries.as_slice()), &word, &criteria, SortOrder::Descending).unwrap();
            prop_assert!(derived.windows(2).all(|w| w[0].population >= w[1].population));
        }

        #[test]
        fn recomputation_is_idempotent(
            countries in arb_countries(),
            word in "[a-z]{0,2}",
            order in arb_order(),
        ) {
            let criteria = FilterCriteriaCursor::new().current_criteria();
            let once = compute(Some(countries.as_slice()), &word, &criteria, order);
            let twice = compute(Some(countries.as_slice()), &word, &criteria, order);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn sorting_and_filtering_commute(
            countries in arb_countries(),
            word in "[a-z]{0,2}",
            order in arb_order(),
        ) {
            let mut sort_then_filter = ViewState::new();
            sort_then_filter.set_countries(countries.clone());
            sort_then_filter.set_order(order);
            sort_then_filter.set_filter_word(&word);

            let mut filter_then_sort = ViewState::new();
            filter_then_sort.set_countries(countries);
            filter_then_sort.set_filter_word(&word);
            filter_then_sort.set_order(order);

            prop_assert_eq!(sort_then_filter.derived(), filter_then_sort.derived());
        }
    }
}
