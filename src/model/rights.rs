use chrono::{DateTime, NaiveDate, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A provider's contractual coverage over a date range, competitions and territories.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::rights_packages)]
pub struct RightsPackage {
    pub id: i32,
    pub provider_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Comma-separated competition ids.
    pub competition_coverage: Option<String>,
    /// Comma-separated territory codes.
    pub territory_coverage: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_exclusive: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RightsPackage {
    /// `None` when the package declares no territory list.
    pub fn covered_territories(&self) -> Option<Vec<String>> {
        let codes: Vec<String> = split_coverage(self.territory_coverage.as_deref())
            .map(|code| code.to_ascii_uppercase())
            .collect();
        if codes.is_empty() {
            None
        } else {
            Some(codes)
        }
    }

    pub fn covers_territory(&self, code: &str) -> bool {
        match self.covered_territories() {
            Some(codes) => codes.iter().any(|c| c.eq_ignore_ascii_case(code)),
            None => true,
        }
    }

    pub fn is_in_window(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

fn split_coverage(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::rights_packages)]
pub struct NewRightsPackage {
    pub provider_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    pub competition_coverage: Option<String>,
    pub territory_coverage: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_exclusive: bool,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

/// Links a fixture to a territory and, optionally, to the package it is broadcast under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::model::schema::fixture_rights, treat_none_as_null = true)]
pub struct FixtureRights {
    pub id: i32,
    pub fixture_id: i32,
    pub territory_id: i32,
    pub rights_package_id: Option<i32>,
    pub platform_name: Option<String>,
    pub platform_url: Option<String>,
    pub is_live: bool,
    pub is_on_demand: bool,
    pub is_free: bool,
    pub requires_subscription: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::fixture_rights)]
pub struct NewFixtureRights {
    pub fixture_id: i32,
    pub territory_id: i32,
    pub rights_package_id: Option<i32>,
    #[validate(length(max = 200))]
    pub platform_name: Option<String>,
    #[validate(length(max = 500))]
    pub platform_url: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_live: bool,
    #[serde(default)]
    pub is_on_demand: bool,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default = "crate::model::default_true")]
    pub requires_subscription: bool,
    pub verified_at: Option<DateTime<Utc>>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(territories: Option<&str>) -> RightsPackage {
        RightsPackage {
            id: 1,
            provider_id: 1,
            name: "Autumn Nations".to_string(),
            description: None,
            competition_coverage: Some("3, 4,".to_string()),
            territory_coverage: territories.map(str::to_string),
            start_date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
            is_exclusive: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn coverage_lists_are_trimmed_and_case_insensitive() {
        let pkg = package(Some("gb, ie ,FR"));
        assert_eq!(pkg.covered_territories(), Some(vec!["GB".into(), "IE".into(), "FR".into()]));
        assert!(pkg.covers_territory("ie"));
        assert!(!pkg.covers_territory("NZ"));
    }

    #[test]
    fn empty_coverage_means_unrestricted() {
        assert!(package(None).covers_territory("ZA"));
        assert!(package(Some(" , ")).covers_territory("ZA"));
    }

    #[test]
    fn window_is_inclusive() {
        let pkg = package(None);
        assert!(pkg.is_in_window(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap()));
        assert!(!pkg.is_in_window(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()));
    }

    #[test]
    fn new_rights_defaults_match_storage_defaults() {
        let body: NewFixtureRights =
            serde_json::from_str(r#"{"fixture_id": 1, "territory_id": 2}"#).unwrap();
        assert!(body.is_live);
        assert!(!body.is_on_demand);
        assert!(!body.is_free);
        assert!(body.requires_subscription);
        assert!(body.is_active);
    }
}
