//! Wire names shared by the filter translator and the list endpoint.

use url::form_urlencoded;

pub const SEARCH: &str = "search";
pub const EDUCATION_LEVEL: &str = "educationLevel";
pub const STATUS: &str = "status";
pub const AMOUNT_MIN: &str = "amountMin";
pub const AMOUNT_MAX: &str = "amountMax";
pub const DEADLINE_FROM: &str = "deadlineFrom";
pub const DEADLINE_TO: &str = "deadlineTo";
pub const COMMUNITY: &str = "community";
pub const GENDER_REQUIREMENT: &str = "genderRequirement";
pub const SORT_BY: &str = "sortBy";
pub const SORT_ORDER: &str = "sortOrder";

/// Raw list parameters as they travel over the wire. Values are kept as
/// strings; interpretation happens in `ScholarshipQuery::from_params`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScholarshipParams {
    pub search: Option<String>,
    pub education_level: Option<String>,
    pub status: Option<String>,
    pub amount_min: Option<String>,
    pub amount_max: Option<String>,
    pub deadline_from: Option<String>,
    pub deadline_to: Option<String>,
    pub community: Vec<String>,
    pub gender_requirement: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ScholarshipParams {
    /// Reads a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Empty values count as absent, unknown keys are skipped, and the last
    /// occurrence of a scalar key wins. `community` accumulates.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            if value.trim().is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                SEARCH => &mut params.search,
                EDUCATION_LEVEL => &mut params.education_level,
                STATUS => &mut params.status,
                AMOUNT_MIN => &mut params.amount_min,
                AMOUNT_MAX => &mut params.amount_max,
                DEADLINE_FROM => &mut params.deadline_from,
                DEADLINE_TO => &mut params.deadline_to,
                GENDER_REQUIREMENT => &mut params.gender_requirement,
                SORT_BY => &mut params.sort_by,
                SORT_ORDER => &mut params.sort_order,
                COMMUNITY => {
                    params.community.push(value);
                    continue;
                }
                _ => continue,
            };
            *slot = Some(value);
        }
        params
    }

    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let scalars = [
            (SEARCH, &self.search),
            (EDUCATION_LEVEL, &self.education_level),
            (STATUS, &self.status),
            (AMOUNT_MIN, &self.amount_min),
            (AMOUNT_MAX, &self.amount_max),
            (DEADLINE_FROM, &self.deadline_from),
            (DEADLINE_TO, &self.deadline_to),
        ];
        let trailing = [
            (GENDER_REQUIREMENT, &self.gender_requirement),
            (SORT_BY, &self.sort_by),
            (SORT_ORDER, &self.sort_order),
        ];

        let mut pairs: Vec<(&'static str, &str)> = scalars
            .into_iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
            .collect();
        pairs.extend(self.community.iter().map(|c| (COMMUNITY, c.as_str())));
        pairs.extend(
            trailing
                .into_iter()
                .filter_map(|(k, v)| v.as_deref().map(|v| (k, v))),
        );
        pairs
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_community_accumulates() {
        let params = ScholarshipParams::parse("community=STEM&community=Arts&search=x");
        assert_eq!(params.community, vec!["STEM".to_string(), "Arts".to_string()]);
        assert_eq!(params.search.as_deref(), Some("x"));
    }

    #[test]
    fn empty_values_and_unknown_keys_are_absent() {
        let params = ScholarshipParams::parse("?search=&foo=bar&status=%20");
        assert!(params.is_empty());
    }

    #[test]
    fn decodes_percent_and_plus_encoding() {
        let params =
            ScholarshipParams::parse("educationLevel=Bachelor%27s&genderRequirement=All+Genders");
        assert_eq!(params.education_level.as_deref(), Some("Bachelor's"));
        assert_eq!(params.gender_requirement.as_deref(), Some("All Genders"));
    }

    #[test]
    fn last_scalar_wins() {
        let params = ScholarshipParams::parse("sortBy=amount&sortBy=name");
        assert_eq!(params.sort_by.as_deref(), Some("name"));
    }

    #[test]
    fn serializes_every_present_value() {
        let params = ScholarshipParams {
            search: Some("robotics club".into()),
            community: vec!["STEM".into(), "Arts & Crafts".into()],
            sort_order: Some("desc".into()),
            ..Default::default()
        };
        let qs = params.to_query_string();
        assert_eq!(
            qs,
            "search=robotics+club&community=STEM&community=Arts+%26+Crafts&sortOrder=desc"
        );
        assert_eq!(ScholarshipParams::parse(&qs), params);
    }
}
