//! Catalog search: the client-side filter translator, the wire parameter
//! reader and the resolver that turns parameters into clauses and ordering.

pub mod filter_state;
pub mod params;
pub mod predicate;
pub mod sort;

pub use filter_state::FilterState;
pub use params::ScholarshipParams;
pub use predicate::{Clause, Filter};
pub use sort::{SortField, SortOrder, SortSpec};

use crate::models::scholarship::{GenderRequirement, Scholarship};
use crate::query::filter_state::ALL_EDUCATION_LEVELS;
use crate::utils::{money::parse_amount, time::parse_date};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScholarshipQuery {
    pub filter: Filter,
    pub sort: SortSpec,
}

impl ScholarshipQuery {
    /// Never fails: a value that cannot be read drops its own condition and
    /// leaves the rest of the query intact.
    pub fn from_params(params: &ScholarshipParams) -> Self {
        let status = non_blank(&params.status).map(|s| Clause::Status(s.to_string()));

        let education_level = non_blank(&params.education_level)
            .filter(|level| !level.eq_ignore_ascii_case(ALL_EDUCATION_LEVELS))
            .map(|level| Clause::EducationLevel(level.to_string()));

        let amount_min = non_blank(&params.amount_min).and_then(parse_amount);
        let amount_max = non_blank(&params.amount_max).and_then(parse_amount);
        let amount = (amount_min.is_some() || amount_max.is_some()).then_some(Clause::AmountRange {
            min: amount_min,
            max: amount_max,
        });

        let deadline_from = non_blank(&params.deadline_from).and_then(parse_date);
        let deadline_to = non_blank(&params.deadline_to).and_then(parse_date);
        let deadline = (deadline_from.is_some() || deadline_to.is_some()).then_some(
            Clause::DeadlineRange {
                from: deadline_from,
                to: deadline_to,
            },
        );

        let gender = non_blank(&params.gender_requirement)
            .filter(|g| *g != GenderRequirement::DEFAULT)
            .map(|g| Clause::GenderRequirement(g.to_string()));

        let filter = Filter::new()
            .and_maybe(params.search.as_deref().and_then(Clause::search))
            .and_maybe(status)
            .and_maybe(education_level)
            .and_maybe(amount)
            .and_maybe(deadline)
            .and_maybe(Clause::community(&params.community))
            .and_maybe(gender);

        let sort = SortSpec::from_raw(
            non_blank(&params.sort_by),
            non_blank(&params.sort_order),
        );

        Self { filter, sort }
    }

    pub fn parse(query_string: &str) -> Self {
        Self::from_params(&ScholarshipParams::parse(query_string))
    }

    pub fn apply(&self, records: Vec<Scholarship>) -> Vec<Scholarship> {
        let mut matched: Vec<Scholarship> = records
            .into_iter()
            .filter(|r| self.filter.matches(r))
            .collect();
        self.sort.sort(&mut matched);
        matched
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::predicate::fixtures::with;
    use super::*;

    fn names(records: Vec<Scholarship>) -> Vec<String> {
        records.into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn absent_parameters_match_everything() {
        let records = vec![
            with("b", |s| s.status = "inactive".into()),
            with("a", |s| s.amount = "N/A".into()),
        ];
        assert_eq!(names(ScholarshipQuery::parse("").apply(records)), vec!["a", "b"]);
    }

    #[test]
    fn amount_window_from_query_string() {
        let records = vec![
            with("500", |s| s.amount = "500".into()),
            with("1000", |s| s.amount = "1000".into()),
            with("3000", |s| s.amount = "3000".into()),
            with("5000", |s| s.amount = "5000".into()),
            with("9000", |s| s.amount = "9000".into()),
            with("n/a", |s| s.amount = "N/A".into()),
        ];
        let query = ScholarshipQuery::parse("amountMin=1000&amountMax=5000&sortBy=amount");
        assert_eq!(names(query.apply(records)), vec!["1000", "3000", "5000"]);
    }

    #[test]
    fn malformed_values_drop_only_their_condition() {
        let records = vec![
            with("kept", |s| s.amount = "2000".into()),
            with("inactive", |s| {
                s.amount = "2000".into();
                s.status = "inactive".into();
            }),
        ];
        let query =
            ScholarshipQuery::parse("amountMin=lots&amountMax=&deadlineFrom=someday&status=active");
        assert_eq!(query.filter.clauses(), &[Clause::Status("active".into())]);
        assert_eq!(names(query.apply(records)), vec!["kept"]);
    }

    #[test]
    fn sentinels_are_not_conditions() {
        let query = ScholarshipQuery::parse("educationLevel=all&genderRequirement=All+Genders");
        assert!(query.filter.is_empty());
    }

    #[test]
    fn one_sided_deadline_is_open_ended() {
        let records = vec![
            with("old", |s| s.application_end_date = "2024-01-01".into()),
            with("new", |s| s.application_end_date = "2026-01-01".into()),
        ];
        let query = ScholarshipQuery::parse("deadlineFrom=2025-01-01");
        assert_eq!(names(query.apply(records)), vec!["new"]);
    }

    #[test]
    fn search_and_sort_from_the_fixture_set() {
        let records = vec![
            with("Robotics Excellence Award", |s| {
                s.application_end_date = "2025-01-01".into()
            }),
            with("Future Engineers", |s| {
                s.description = "open to robotics teams".into();
                s.application_end_date = "2025-06-01".into();
            }),
            with("Poetry Prize", |s| s.application_end_date = "2024-12-01".into()),
        ];
        let query = ScholarshipQuery::parse("search=robotics&sortBy=applicationEndDate&sortOrder=desc");
        assert_eq!(
            names(query.apply(records)),
            vec!["Future Engineers", "Robotics Excellence Award"]
        );
    }

    #[test]
    fn repeated_queries_return_the_same_order() {
        let records: Vec<Scholarship> = (0..8)
            .map(|i| with(&format!("same {}", i % 3), |s| s.amount = "100".into()))
            .collect();
        let query = ScholarshipQuery::parse("sortBy=amount&sortOrder=desc");
        let first: Vec<_> = query.apply(records.clone()).iter().map(|r| r.id).collect();
        let mut shuffled = records;
        shuffled.rotate_left(3);
        let second: Vec<_> = query.apply(shuffled).iter().map(|r| r.id).collect();
        assert_eq!(first, second);
    }
}
