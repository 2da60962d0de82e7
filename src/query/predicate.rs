use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::scholarship::{GenderRequirement, Scholarship};
use crate::utils::{money::parse_amount, time::parse_date};

/// One filter condition over a scholarship record.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Lowercased needle, matched against name or description.
    Search(String),
    Status(String),
    EducationLevel(String),
    AmountRange {
        min: Option<Decimal>,
        max: Option<Decimal>,
    },
    DeadlineRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// Lowercased tags; any one of them is enough.
    Community(Vec<String>),
    GenderRequirement(String),
}

impl Clause {
    pub fn search(text: &str) -> Option<Self> {
        let needle = text.trim().to_lowercase();
        (!needle.is_empty()).then_some(Clause::Search(needle))
    }

    pub fn community<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        (!tags.is_empty()).then_some(Clause::Community(tags))
    }

    pub fn matches(&self, record: &Scholarship) -> bool {
        match self {
            Clause::Search(needle) => {
                record.name.to_lowercase().contains(needle.as_str())
                    || record.description.to_lowercase().contains(needle.as_str())
            }
            Clause::Status(status) => record.status == *status,
            Clause::EducationLevel(level) => record.education_level == *level,
            Clause::AmountRange { min, max } => match parse_amount(&record.amount) {
                Some(amount) => within(amount, *min, *max),
                None => false,
            },
            Clause::DeadlineRange { from, to } => match parse_date(&record.application_end_date) {
                Some(date) => within(date, *from, *to),
                None => false,
            },
            Clause::Community(tags) => {
                let parts: Vec<String> = record
                    .community
                    .split(',')
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty())
                    .collect();
                tags.iter()
                    .any(|tag| parts.iter().any(|part| part.contains(tag.as_str())))
            }
            Clause::GenderRequirement(gender) => {
                record.gender_requirement == *gender
                    || record.gender_requirement == GenderRequirement::DEFAULT
            }
        }
    }
}

fn within<T: PartialOrd>(value: T, low: Option<T>, high: Option<T>) -> bool {
    low.map_or(true, |low| value >= low) && high.map_or(true, |high| value <= high)
}

/// Conjunction of clauses. No clauses means every record matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<Clause>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn and_maybe(self, clause: Option<Clause>) -> Self {
        match clause {
            Some(c) => self.and(c),
            None => self,
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, record: &Scholarship) -> bool {
        self.clauses.iter().all(|c| c.matches(record))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use crate::models::scholarship::Scholarship;

    pub fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    pub fn scholarship(name: &str) -> Scholarship {
        Scholarship {
            id: Uuid::new_v4(),
            name: name.to_string(),
            amount: "1000".to_string(),
            education_level: "Bachelor's".to_string(),
            application_end_date: "2025-01-01".to_string(),
            description: String::new(),
            eligibility: String::new(),
            community: String::new(),
            gender_requirement: "All Genders".to_string(),
            status: "active".to_string(),
            application_link: None,
            organization_logo: None,
            application_form_data: None,
            created_at: at(0),
            updated_at: at(0),
        }
    }

    pub fn with(name: &str, edit: impl FnOnce(&mut Scholarship)) -> Scholarship {
        let mut s = scholarship(name);
        edit(&mut s);
        s
    }
}
