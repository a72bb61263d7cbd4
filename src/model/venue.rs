use crate::util::timezone::validate_timezone;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::venues)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::venues)]
pub struct NewVenue {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[validate(range(min = 0))]
    pub capacity: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[validate(length(max = 100), custom = "validate_timezone")]
    pub timezone: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}
