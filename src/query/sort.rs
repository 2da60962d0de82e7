use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::scholarship::Scholarship;
use crate::utils::{money::parse_amount, time::parse_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Amount,
    ApplicationEndDate,
    CreatedAt,
    EducationLevel,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Amount => "amount",
            SortField::ApplicationEndDate => "applicationEndDate",
            SortField::CreatedAt => "createdAt",
            SortField::EducationLevel => "educationLevel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [
            SortField::Name,
            SortField::Amount,
            SortField::ApplicationEndDate,
            SortField::CreatedAt,
            SortField::EducationLevel,
        ]
        .into_iter()
        .find(|f| f.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    /// Unknown fields fall back to name ascending, whatever order was asked
    /// for. An unknown order on a known field means ascending.
    pub fn from_raw(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let field = match sort_by {
            None => SortField::Name,
            Some(raw) => match SortField::parse(raw) {
                Some(field) => field,
                None => {
                    tracing::debug!(sort_by = raw, "unsupported sort field, using name");
                    return Self::default();
                }
            },
        };
        let order = sort_order.and_then(SortOrder::parse).unwrap_or_default();
        Self { field, order }
    }

    pub fn compare(&self, a: &Scholarship, b: &Scholarship) -> Ordering {
        let primary = match self.field {
            SortField::Name => directed(
                a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                self.order,
            ),
            SortField::EducationLevel => directed(a.education_level.cmp(&b.education_level), self.order),
            SortField::CreatedAt => directed(a.created_at.cmp(&b.created_at), self.order),
            SortField::Amount => {
                compare_parsed(parse_amount(&a.amount), parse_amount(&b.amount), self.order)
            }
            SortField::ApplicationEndDate => compare_parsed(
                parse_date(&a.application_end_date),
                parse_date(&b.application_end_date),
                self.order,
            ),
        };
        primary
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }

    pub fn sort(&self, records: &mut [Scholarship]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Values that failed to parse go last in either direction.
fn compare_parsed<T: Ord>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::predicate::fixtures::{at, with};

    fn ordered(spec: SortSpec, mut records: Vec<Scholarship>) -> Vec<String> {
        spec.sort(&mut records);
        records.into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn deadline_descending() {
        let records = vec![
            with("jan", |s| s.application_end_date = "2025-01-01".into()),
            with("jun", |s| s.application_end_date = "2025-06-01".into()),
            with("dec", |s| s.application_end_date = "2024-12-01".into()),
        ];
        let spec = SortSpec::from_raw(Some("applicationEndDate"), Some("desc"));
        assert_eq!(ordered(spec, records), vec!["jun", "jan", "dec"]);
    }

    #[test]
    fn unknown_field_falls_back_to_name_ascending() {
        let spec = SortSpec::from_raw(Some("foo"), Some("desc"));
        assert_eq!(spec, SortSpec::default());

        let records = vec![with("b", |_| {}), with("C", |_| {}), with("a", |_| {})];
        assert_eq!(ordered(spec, records), vec!["a", "b", "C"]);
    }

    #[test]
    fn unknown_order_means_ascending() {
        let spec = SortSpec::from_raw(Some("amount"), Some("sideways"));
        assert_eq!(spec.order, SortOrder::Asc);
        assert_eq!(spec.field, SortField::Amount);
    }

    #[test]
    fn unparsable_amounts_sort_last_both_ways() {
        let records = vec![
            with("na", |s| s.amount = "N/A".into()),
            with("small", |s| s.amount = "500".into()),
            with("big", |s| s.amount = "$12,000".into()),
        ];
        let asc = SortSpec::from_raw(Some("amount"), None);
        assert_eq!(ordered(asc, records.clone()), vec!["small", "big", "na"]);
        let desc = SortSpec::from_raw(Some("amount"), Some("desc"));
        assert_eq!(ordered(desc, records), vec!["big", "small", "na"]);
    }

    #[test]
    fn ties_are_broken_deterministically() {
        let mut records: Vec<Scholarship> = (0..6)
            .map(|i| {
                with(&format!("award {}", i % 2), |s| {
                    s.amount = "1000".into();
                    s.created_at = at(100 - i);
                })
            })
            .collect();
        let spec = SortSpec::from_raw(Some("amount"), None);

        spec.sort(&mut records);
        let first: Vec<_> = records.iter().map(|r| r.id).collect();
        records.reverse();
        spec.sort(&mut records);
        let second: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(first, second);
        assert!(records
            .windows(2)
            .all(|w| (w[0].name.as_str(), w[0].created_at) <= (w[1].name.as_str(), w[1].created_at)));
    }
}
