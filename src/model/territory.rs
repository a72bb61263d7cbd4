use crate::util::timezone::validate_timezone;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref TERRITORY_CODE_RE: Regex = Regex::new(r"^[A-Z]{2,3}$").unwrap();
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::territories)]
pub struct Territory {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::territories)]
pub struct NewTerritory {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(regex(
        path = "TERRITORY_CODE_RE",
        message = "Territory code must be an upper-case ISO 3166 alpha-2 or alpha-3 code"
    ))]
    pub code: String,
    #[validate(length(max = 100))]
    pub region: Option<String>,
    #[validate(length(max = 100), custom = "validate_timezone")]
    pub timezone: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn territory_code_must_be_iso_shaped() {
        let ok: NewTerritory =
            serde_json::from_str(r#"{"name": "New Zealand", "code": "NZ", "timezone": "Pacific/Auckland"}"#)
                .unwrap();
        assert!(ok.validate().is_ok());

        let lower: NewTerritory = serde_json::from_str(r#"{"name": "Ireland", "code": "ie"}"#).unwrap();
        assert!(lower.validate().is_err());
    }

    #[test]
    fn timezone_must_be_iana() {
        let bad: NewTerritory =
            serde_json::from_str(r#"{"name": "Ireland", "code": "IE", "timezone": "GMT+1ish"}"#).unwrap();
        assert!(bad.validate().is_err());

        let missing: NewTerritory = serde_json::from_str(r#"{"name": "Ireland", "code": "IE"}"#).unwrap();
        assert!(missing.validate().is_ok());
    }
}
