use crate::model::rights::FixtureRights;
use crate::model::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct FilteredUser {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for FilteredUser {
    fn from(user: User) -> Self {
        FilteredUser {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar_url: user.avatar_url,
            is_active: user.is_active,
            is_verified: user.is_verified,
            last_login: user.last_login,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RootResponse {
    pub service: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct FixtureRightsList {
    pub fixture_id: i32,
    pub rights: Vec<FixtureRights>,
}

const DEFAULT_PAGE_SIZE: i64 = 100;
const DEFAULT_WINDOW: i64 = 50;
const MAX_WINDOW: i64 = 200;

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_window() -> i64 {
    DEFAULT_WINDOW
}

/// `?skip=&limit=` on list endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_page_size")]
    pub limit: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListParams {
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.max(0)
    }
}

/// `?limit=` on the upcoming and per-team fixture views; clamped to 200.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowParams {
    #[serde(default = "default_window")]
    pub limit: i64,
}

impl WindowParams {
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, MAX_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_defaults() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 100);

        let negative = ListParams { skip: -4, limit: -1 };
        assert_eq!(negative.offset(), 0);
        assert_eq!(negative.limit(), 0);
    }

    #[test]
    fn window_is_capped() {
        let params: WindowParams = serde_json::from_str(r#"{"limit": 1000}"#).unwrap();
        assert_eq!(params.limit(), 200);
        let params: WindowParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit(), 50);
    }
}
