use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::sports)]
pub struct Sport {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::sports)]
pub struct NewSport {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub code: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::governing_bodies)]
pub struct GoverningBody {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub website_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::governing_bodies)]
pub struct NewGoverningBody {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub code: String,
    pub sport_id: i32,
    #[validate(url)]
    pub website_url: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}
