use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::scholarship::{GenderRequirement, ScholarshipStatus};
use crate::query::params::ScholarshipParams;
use crate::query::sort::{SortField, SortOrder};
use crate::utils::time::format_date;

pub const ALL_EDUCATION_LEVELS: &str = "all";
pub const DEFAULT_AMOUNT_MIN: i64 = 0;
pub const DEFAULT_AMOUNT_MAX: i64 = 100_000;

/// Search and sort criteria as held by a catalog page before they are put
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    /// An education level, or `"all"`.
    pub education_level: String,
    pub status: Option<ScholarshipStatus>,
    pub amount_range: (Decimal, Decimal),
    pub deadline_range: (Option<NaiveDate>, Option<NaiveDate>),
    pub community: BTreeSet<String>,
    pub gender_requirement: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            education_level: ALL_EDUCATION_LEVELS.to_string(),
            status: None,
            amount_range: (
                Decimal::from(DEFAULT_AMOUNT_MIN),
                Decimal::from(DEFAULT_AMOUNT_MAX),
            ),
            deadline_range: (None, None),
            community: BTreeSet::new(),
            gender_requirement: GenderRequirement::DEFAULT.to_string(),
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl FilterState {
    /// State used by the public catalog page, which only lists active awards.
    pub fn public() -> Self {
        Self {
            status: Some(ScholarshipStatus::Active),
            ..Self::default()
        }
    }

    /// Applies default omission: a field equal to its default is left out.
    pub fn to_params(&self) -> ScholarshipParams {
        let mut params = ScholarshipParams::default();

        let search = self.search.trim();
        if !search.is_empty() {
            params.search = Some(search.to_string());
        }

        if self.education_level != ALL_EDUCATION_LEVELS && !self.education_level.trim().is_empty() {
            params.education_level = Some(self.education_level.clone());
        }

        params.status = self.status.map(|s| s.as_str().to_string());

        let (min, max) = self.amount_range;
        if min > Decimal::from(DEFAULT_AMOUNT_MIN) || max < Decimal::from(DEFAULT_AMOUNT_MAX) {
            params.amount_min = Some(min.normalize().to_string());
            params.amount_max = Some(max.normalize().to_string());
        }

        if let (Some(from), Some(to)) = self.deadline_range {
            params.deadline_from = Some(format_date(from));
            params.deadline_to = Some(format_date(to));
        }

        params.community = self
            .community
            .iter()
            .filter(|c| !c.trim().is_empty())
            .cloned()
            .collect();

        if self.gender_requirement != GenderRequirement::DEFAULT
            && !self.gender_requirement.trim().is_empty()
        {
            params.gender_requirement = Some(self.gender_requirement.clone());
        }

        if self.sort_by != SortField::Name {
            params.sort_by = Some(self.sort_by.as_str().to_string());
        }
        if self.sort_order != SortOrder::Asc {
            params.sort_order = Some(self.sort_order.as_str().to_string());
        }

        params
    }

    pub fn to_query_string(&self) -> String {
        self.to_params().to_query_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::predicate::Clause;
    use crate::query::sort::SortSpec;
    use crate::query::ScholarshipQuery;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn defaults_produce_an_empty_query() {
        assert_eq!(FilterState::default().to_query_string(), "");
        let mut state = FilterState::default();
        state.search = "   ".into();
        state.deadline_range = (Some(date("2025-01-01")), None);
        assert_eq!(state.to_query_string(), "");
    }

    #[test]
    fn public_state_only_forces_status() {
        assert_eq!(FilterState::public().to_query_string(), "status=active");
    }

    #[test]
    fn amount_range_is_sent_as_a_pair_when_either_end_moves() {
        let mut state = FilterState::default();
        state.amount_range.1 = Decimal::from(5000);
        let params = state.to_params();
        assert_eq!(params.amount_min.as_deref(), Some("0"));
        assert_eq!(params.amount_max.as_deref(), Some("5000"));

        state.amount_range = (Decimal::from(1000), Decimal::from(100_000));
        assert_eq!(state.to_query_string(), "amountMin=1000&amountMax=100000");
    }

    #[test]
    fn search_is_trimmed_before_sending() {
        let mut state = FilterState::default();
        state.search = "  robotics ".into();
        assert_eq!(state.to_query_string(), "search=robotics");
    }

    #[test]
    fn community_members_repeat_the_parameter() {
        let mut state = FilterState::default();
        state.community = ["STEM".to_string(), "Arts".to_string(), " ".to_string()]
            .into_iter()
            .collect();
        assert_eq!(state.to_query_string(), "community=Arts&community=STEM");
    }

    #[test]
    fn round_trips_through_the_parameter_reader() {
        let state = FilterState {
            search: "robotics".into(),
            education_level: "Master's".into(),
            status: Some(ScholarshipStatus::Active),
            amount_range: (Decimal::from(1000), Decimal::from(5000)),
            deadline_range: (Some(date("2025-01-01")), Some(date("2025-06-30"))),
            community: ["STEM".to_string(), "Rural & Remote".to_string()]
                .into_iter()
                .collect(),
            gender_requirement: "Female".into(),
            sort_by: SortField::ApplicationEndDate,
            sort_order: SortOrder::Desc,
        };

        let qs = state.to_query_string();
        let read = ScholarshipParams::parse(&qs);
        assert_eq!(read, state.to_params());

        let query = ScholarshipQuery::from_params(&read);
        let expected = ScholarshipQuery {
            filter: crate::query::Filter::new()
                .and(Clause::Search("robotics".into()))
                .and(Clause::Status("active".into()))
                .and(Clause::EducationLevel("Master's".into()))
                .and(Clause::AmountRange {
                    min: Some(Decimal::from(1000)),
                    max: Some(Decimal::from(5000)),
                })
                .and(Clause::DeadlineRange {
                    from: Some(date("2025-01-01")),
                    to: Some(date("2025-06-30")),
                })
                .and(Clause::Community(vec![
                    "rural & remote".into(),
                    "stem".into(),
                ]))
                .and(Clause::GenderRequirement("Female".into())),
            sort: SortSpec {
                field: SortField::ApplicationEndDate,
                order: SortOrder::Desc,
            },
        };
        assert_eq!(query, expected);
    }

    #[test]
    fn default_round_trip_is_an_unfiltered_query() {
        let read = ScholarshipParams::parse(&FilterState::default().to_query_string());
        assert_eq!(ScholarshipQuery::from_params(&read), ScholarshipQuery::default());
    }
}
