//! Conversions between UTC kickoff times and IANA zones.

use chrono::{DateTime, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use validator::ValidationError;

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Fallback zones for territories without a stored timezone.
const TERRITORY_TIMEZONES: [(&str, &str); 7] = [
    ("GB", "Europe/London"),
    ("FR", "Europe/Paris"),
    ("US", "America/New_York"),
    ("AU", "Australia/Sydney"),
    ("NZ", "Pacific/Auckland"),
    ("ZA", "Africa/Johannesburg"),
    ("IE", "Europe/Dublin"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimezoneError {
    #[error("unknown timezone '{0}'")]
    Unknown(String),
    #[error("{0} does not exist in {1}")]
    NonexistentLocalTime(NaiveDateTime, String),
}

pub fn parse_timezone(name: &str) -> Result<Tz, TimezoneError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimezoneError::Unknown(name.to_string()))
}

pub fn utc_to_timezone(at: DateTime<Utc>, timezone: &str) -> Result<DateTime<Tz>, TimezoneError> {
    Ok(at.with_timezone(&parse_timezone(timezone)?))
}

/// Wall-clock time in `timezone` to UTC. Ambiguous times take the earlier instant.
pub fn timezone_to_utc(local: NaiveDateTime, timezone: &str) -> Result<DateTime<Utc>, TimezoneError> {
    let tz = parse_timezone(timezone)?;
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| TimezoneError::NonexistentLocalTime(local, timezone.to_string()))
}

/// Offset from UTC in seconds at the given instant.
pub fn timezone_offset(timezone: &str, at: DateTime<Utc>) -> Result<i32, TimezoneError> {
    let tz = parse_timezone(timezone)?;
    Ok(tz
        .offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc())
}

pub fn territory_timezone(territory_code: Option<&str>) -> &'static str {
    territory_code
        .and_then(|code| {
            TERRITORY_TIMEZONES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(code))
        })
        .map(|(_, timezone)| *timezone)
        .unwrap_or(DEFAULT_TIMEZONE)
}

pub fn validate_timezone(timezone: &str) -> Result<(), ValidationError> {
    parse_timezone(timezone).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("timezone");
        err.message = Some("Timezone must be an IANA name such as Europe/Dublin".into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn kickoff_shifts_into_local_time() {
        let local = utc_to_timezone(utc(2025, 2, 1, 14, 15), "Pacific/Auckland").unwrap();
        assert_eq!(local.format("%Y-%m-%d %H:%M").to_string(), "2025-02-02 03:15");

        let dublin = utc_to_timezone(utc(2025, 7, 1, 18, 0), "Europe/Dublin").unwrap();
        assert_eq!(dublin.format("%H:%M").to_string(), "19:00");
    }

    #[test]
    fn local_wall_clock_maps_back_to_utc() {
        let local = NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(17, 45, 0)
            .unwrap();
        assert_eq!(timezone_to_utc(local, "Europe/Paris").unwrap(), utc(2025, 3, 15, 16, 45));
    }

    #[test]
    fn spring_forward_gap_is_rejected() {
        let local = NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        assert!(matches!(
            timezone_to_utc(local, "Europe/London"),
            Err(TimezoneError::NonexistentLocalTime(_, _))
        ));
    }

    #[test]
    fn offsets_follow_daylight_saving() {
        assert_eq!(timezone_offset("Europe/London", utc(2025, 1, 10, 12, 0)), Ok(0));
        assert_eq!(timezone_offset("Europe/London", utc(2025, 7, 10, 12, 0)), Ok(3600));
        assert_eq!(timezone_offset("Australia/Sydney", utc(2025, 1, 10, 12, 0)), Ok(39600));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert_eq!(
            utc_to_timezone(utc(2025, 1, 1, 0, 0), "Mars/Olympus").unwrap_err(),
            TimezoneError::Unknown("Mars/Olympus".to_string())
        );
        assert!(validate_timezone("Mars/Olympus").is_err());
        assert!(validate_timezone("Africa/Johannesburg").is_ok());
    }

    #[test]
    fn territory_fallbacks() {
        assert_eq!(territory_timezone(Some("NZ")), "Pacific/Auckland");
        assert_eq!(territory_timezone(Some("ie")), "Europe/Dublin");
        assert_eq!(territory_timezone(Some("JP")), DEFAULT_TIMEZONE);
        assert_eq!(territory_timezone(None), DEFAULT_TIMEZONE);
    }
}
