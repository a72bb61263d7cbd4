use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::model::schema::competitions, treat_none_as_null = true)]
pub struct Competition {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub governing_body_id: Option<i32>,
    pub tier: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::competitions)]
pub struct NewCompetition {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub code: String,
    pub sport_id: i32,
    pub governing_body_id: Option<i32>,
    #[validate(length(max = 50))]
    pub tier: Option<String>,
    #[validate(length(max = 100))]
    pub format: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCompetition {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub code: Option<String>,
    pub sport_id: Option<i32>,
    pub governing_body_id: Option<i32>,
    #[validate(length(max = 50))]
    pub tier: Option<String>,
    #[validate(length(max = 100))]
    pub format: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateCompetition {
    pub fn merge_into(self, competition: &mut Competition) {
        if let Some(name) = self.name {
            competition.name = name;
        }
        if let Some(code) = self.code {
            competition.code = code;
        }
        if let Some(sport_id) = self.sport_id {
            competition.sport_id = sport_id;
        }
        if self.governing_body_id.is_some() {
            competition.governing_body_id = self.governing_body_id;
        }
        if self.tier.is_some() {
            competition.tier = self.tier;
        }
        if self.format.is_some() {
            competition.format = self.format;
        }
        if self.description.is_some() {
            competition.description = self.description;
        }
        if self.logo_url.is_some() {
            competition.logo_url = self.logo_url;
        }
        if let Some(is_active) = self.is_active {
            competition.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_code_and_keeps_sport() {
        let mut competition = Competition {
            id: 1,
            name: "Six Nations".to_string(),
            code: "6N".to_string(),
            sport_id: 1,
            governing_body_id: None,
            tier: Some("International".to_string()),
            format: Some("League".to_string()),
            description: None,
            logo_url: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        UpdateCompetition {
            code: Some("SIX_NATIONS".to_string()),
            governing_body_id: Some(3),
            ..Default::default()
        }
        .merge_into(&mut competition);

        assert_eq!(competition.code, "SIX_NATIONS");
        assert_eq!(competition.governing_body_id, Some(3));
        assert_eq!(competition.sport_id, 1);
        assert_eq!(competition.format.as_deref(), Some("League"));
    }

    #[test]
    fn code_longer_than_fifty_is_rejected() {
        let body = NewCompetition {
            name: "Premiership".to_string(),
            code: "X".repeat(51),
            sport_id: 1,
            governing_body_id: None,
            tier: None,
            format: None,
            description: None,
            logo_url: None,
            is_active: true,
        };
        assert!(body.validate().is_err());
    }
}
