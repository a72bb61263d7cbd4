use chrono::{DateTime, NaiveDate, Utc};
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::seasons)]
pub struct Season {
    pub id: i32,
    pub competition_id: i32,
    pub name: String,
    pub year: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::seasons)]
pub struct NewSeason {
    pub competition_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1871, max = 2200))]
    pub year: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}
