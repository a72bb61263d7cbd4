use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Broadcast or streaming company.
#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::providers)]
pub struct Provider {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::providers)]
pub struct NewProvider {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub code: String,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub provider_type: Option<String>,
    #[validate(url)]
    pub website_url: Option<String>,
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
    pub description: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

/// A channel or app operated by a provider.
#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::platforms)]
pub struct Platform {
    pub id: i32,
    pub provider_id: i32,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub platform_type: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::platforms)]
pub struct NewPlatform {
    pub provider_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub code: String,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub platform_type: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}
