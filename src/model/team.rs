use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::model::schema::teams, treat_none_as_null = true)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub team_type: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::teams)]
pub struct NewTeam {
    #[validate(length(min = 1, max = 200, message = "Team name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(max = 100))]
    pub short_name: Option<String>,
    #[validate(length(max = 20))]
    pub code: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub team_type: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
    pub description: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

/// Partial update body; absent fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTeam {
    #[validate(length(min = 1, max = 200, message = "Team name must be 1-200 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub short_name: Option<String>,
    #[validate(length(max = 20))]
    pub code: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub team_type: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateTeam {
    pub fn merge_into(self, team: &mut Team) {
        if let Some(name) = self.name {
            team.name = name;
        }
        if self.short_name.is_some() {
            team.short_name = self.short_name;
        }
        if self.code.is_some() {
            team.code = self.code;
        }
        if self.team_type.is_some() {
            team.team_type = self.team_type;
        }
        if self.country.is_some() {
            team.country = self.country;
        }
        if self.city.is_some() {
            team.city = self.city;
        }
        if self.logo_url.is_some() {
            team.logo_url = self.logo_url;
        }
        if self.description.is_some() {
            team.description = self.description;
        }
        if let Some(is_active) = self.is_active {
            team.is_active = is_active;
        }
    }
}
