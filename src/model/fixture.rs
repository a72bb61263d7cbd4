use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::model::schema::fixtures, treat_none_as_null = true)]
pub struct Fixture {
    pub id: i32,
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub venue_id: Option<i32>,
    pub match_date: DateTime<Utc>,
    pub round: Option<String>,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub external_id: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fixture {
    /// Unknown stored values are read as `Scheduled`.
    pub fn fixture_status(&self) -> FixtureStatus {
        self.status.parse().unwrap_or(FixtureStatus::Scheduled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

impl FixtureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "scheduled",
            FixtureStatus::Live => "live",
            FixtureStatus::Completed => "completed",
            FixtureStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(FixtureStatus::Scheduled),
            "live" => Ok(FixtureStatus::Live),
            "completed" => Ok(FixtureStatus::Completed),
            "cancelled" => Ok(FixtureStatus::Cancelled),
            other => Err(format!("unknown fixture status '{other}'")),
        }
    }
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    status.parse::<FixtureStatus>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("status");
        err.message = Some("Status must be one of scheduled, live, completed, cancelled".into());
        err
    })
}

fn default_status() -> String {
    FixtureStatus::Scheduled.as_str().to_string()
}

#[derive(Debug, Clone, Deserialize, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::fixtures)]
pub struct NewFixture {
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub venue_id: Option<i32>,
    pub match_date: DateTime<Utc>,
    #[validate(length(max = 50))]
    pub round: Option<String>,
    #[serde(default = "default_status")]
    #[validate(custom = "validate_status")]
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    #[validate(length(max = 200))]
    pub external_id: Option<String>,
    #[validate(length(max = 100))]
    pub source: Option<String>,
    pub notes: Option<String>,
    #[serde(default = "crate::model::default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFixture {
    pub season_id: Option<i32>,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub match_date: Option<DateTime<Utc>>,
    #[validate(length(max = 50))]
    pub round: Option<String>,
    #[validate(custom = "validate_status")]
    pub status: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    #[validate(length(max = 200))]
    pub external_id: Option<String>,
    #[validate(length(max = 100))]
    pub source: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateFixture {
    pub fn merge_into(self, fixture: &mut Fixture) {
        if let Some(season_id) = self.season_id {
            fixture.season_id = season_id;
        }
        if let Some(home_team_id) = self.home_team_id {
            fixture.home_team_id = home_team_id;
        }
        if let Some(away_team_id) = self.away_team_id {
            fixture.away_team_id = away_team_id;
        }
        if self.venue_id.is_some() {
            fixture.venue_id = self.venue_id;
        }
        if let Some(match_date) = self.match_date {
            fixture.match_date = match_date;
        }
        if self.round.is_some() {
            fixture.round = self.round;
        }
        if let Some(status) = self.status {
            fixture.status = status;
        }
        if self.home_score.is_some() {
            fixture.home_score = self.home_score;
        }
        if self.away_score.is_some() {
            fixture.away_score = self.away_score;
        }
        if self.external_id.is_some() {
            fixture.external_id = self.external_id;
        }
        if self.source.is_some() {
            fixture.source = self.source;
        }
        if self.notes.is_some() {
            fixture.notes = self.notes;
        }
        if let Some(is_active) = self.is_active {
            fixture.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_scheduled() {
        let body: NewFixture = serde_json::from_str(
            r#"{"season_id": 1, "home_team_id": 2, "away_team_id": 3,
                "match_date": "2025-02-01T14:15:00Z"}"#,
        )
        .unwrap();
        assert_eq!(body.status, "scheduled");
        assert!(body.validate().is_ok());
    }

    #[test]
    fn unknown_status_fails_validation() {
        let update = UpdateFixture {
            status: Some("postponed".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!("LIVE".parse::<FixtureStatus>(), Ok(FixtureStatus::Live));
        assert_eq!(FixtureStatus::Cancelled.to_string(), "cancelled");
    }
}
