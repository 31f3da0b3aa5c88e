//! Validation of bloom data query parameters.

use bloom_data_generator::ObservationRequest;
use bloom_data_observation_models::{DATE_FORMAT, DateRange};
use bloom_data_server_models::BloomDataQueryParams;
use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a bloom data query is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BloomQueryError {
    /// One or more of the five parameters is absent or empty.
    #[error("Missing required query parameters. Required: lat, lon, radius, startDate, endDate.")]
    MissingParameter,

    /// `lat`, `lon`, or `radius` is not a finite number.
    #[error("Invalid geographic parameters. lat, lon, and radius must be numbers.")]
    InvalidNumber,

    /// `startDate` or `endDate` is not a `YYYY-MM-DD` date.
    #[error(
        "Invalid date parameters. startDate and endDate must be dates in YYYY-MM-DD format."
    )]
    InvalidDate,

    /// `radius` is negative.
    #[error("Invalid radius. radius must not be negative.")]
    InvalidRadius,

    /// `startDate` is after `endDate`.
    #[error("Invalid date range. startDate must not be after endDate.")]
    InvalidRange,

    /// The query string itself could not be decoded, e.g. a repeated key.
    #[error("Malformed query string: {0}")]
    MalformedQuery(String),
}

struct RawQuery<'a> {
    lat: &'a str,
    lon: &'a str,
    radius: &'a str,
    start_date: &'a str,
    end_date: &'a str,
}

/// Validates raw query parameters into a generator request.
///
/// Checks run in order: presence, numeric coordinates, date format, radius
/// sign, date ordering. The first failure is returned.
///
/// # Errors
///
/// Returns the [`BloomQueryError`] for the first check that fails.
pub fn parse_query(params: &BloomDataQueryParams) -> Result<ObservationRequest, BloomQueryError> {
    let raw = require_all(params)?;

    let latitude = parse_number(raw.lat)?;
    let longitude = parse_number(raw.lon)?;
    let radius = parse_number(raw.radius)?;

    let dates = DateRange::new(parse_date(raw.start_date)?, parse_date(raw.end_date)?);

    if radius < 0.0 {
        return Err(BloomQueryError::InvalidRadius);
    }
    if dates.is_inverted() {
        return Err(BloomQueryError::InvalidRange);
    }

    Ok(ObservationRequest {
        latitude,
        longitude,
        radius,
        dates,
    })
}

fn require_all(params: &BloomDataQueryParams) -> Result<RawQuery<'_>, BloomQueryError> {
    Ok(RawQuery {
        lat: present(params.lat.as_deref())?,
        lon: present(params.lon.as_deref())?,
        radius: present(params.radius.as_deref())?,
        start_date: present(params.start_date.as_deref())?,
        end_date: present(params.end_date.as_deref())?,
    })
}

fn present(value: Option<&str>) -> Result<&str, BloomQueryError> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(BloomQueryError::MissingParameter)
}

fn parse_number(value: &str) -> Result<f64, BloomQueryError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(BloomQueryError::InvalidNumber)
}

fn parse_date(value: &str) -> Result<NaiveDate, BloomQueryError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| BloomQueryError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(lat: &str, lon: &str, radius: &str, start: &str, end: &str) -> BloomDataQueryParams {
        BloomDataQueryParams {
            lat: Some(lat.to_string()),
            lon: Some(lon.to_string()),
            radius: Some(radius.to_string()),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
        }
    }

    #[test]
    fn valid_query() {
        let request = parse_query(&params("10", "-20.5", "2", "2025-03-01", "2025-05-31")).unwrap();
        assert!((request.latitude - 10.0).abs() < f64::EPSILON);
        assert!((request.longitude + 20.5).abs() < f64::EPSILON);
        assert!((request.radius - 2.0).abs() < f64::EPSILON);
        assert_eq!(request.dates.start.to_string(), "2025-03-01");
        assert_eq!(request.dates.end.to_string(), "2025-05-31");
    }

    #[test]
    fn missing_or_empty_parameter() {
        let mut p = params("10", "20", "2", "2025-03-01", "2025-05-31");
        p.radius = None;
        assert_eq!(parse_query(&p), Err(BloomQueryError::MissingParameter));

        let p = params("10", "20", "2", "", "2025-05-31");
        assert_eq!(parse_query(&p), Err(BloomQueryError::MissingParameter));

        assert_eq!(
            parse_query(&BloomDataQueryParams::default()),
            Err(BloomQueryError::MissingParameter)
        );
    }

    #[test]
    fn missing_wins_over_invalid() {
        let mut p = params("abc", "20", "2", "2025-03-01", "2025-05-31");
        p.end_date = None;
        assert_eq!(parse_query(&p), Err(BloomQueryError::MissingParameter));
    }

    #[test]
    fn non_numeric_coordinates() {
        for (lat, lon, radius) in [("abc", "0", "1"), ("0", "east", "1"), ("0", "0", "NaN"), ("inf", "0", "1")] {
            assert_eq!(
                parse_query(&params(lat, lon, radius, "2025-03-01", "2025-05-31")),
                Err(BloomQueryError::InvalidNumber),
                "{lat} {lon} {radius}"
            );
        }
    }

    #[test]
    fn malformed_dates() {
        assert_eq!(
            parse_query(&params("0", "0", "1", "03/01/2025", "2025-05-31")),
            Err(BloomQueryError::InvalidDate)
        );
        assert_eq!(
            parse_query(&params("0", "0", "1", "2025-03-01", "2025-02-30")),
            Err(BloomQueryError::InvalidDate)
        );
    }

    #[test]
    fn negative_radius() {
        assert_eq!(
            parse_query(&params("0", "0", "-1", "2025-03-01", "2025-05-31")),
            Err(BloomQueryError::InvalidRadius)
        );
    }

    #[test]
    fn inverted_range() {
        assert_eq!(
            parse_query(&params("0", "0", "1", "2025-05-31", "2025-03-01")),
            Err(BloomQueryError::InvalidRange)
        );
    }

    #[test]
    fn same_day_range_is_valid() {
        assert!(parse_query(&params("10", "20", "2", "2025-03-01", "2025-03-01")).is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            BloomQueryError::MissingParameter.to_string(),
            "Missing required query parameters. Required: lat, lon, radius, startDate, endDate."
        );
        assert_eq!(
            BloomQueryError::InvalidNumber.to_string(),
            "Invalid geographic parameters. lat, lon, and radius must be numbers."
        );
        assert_eq!(
            BloomQueryError::MalformedQuery("duplicate field `lat`".to_string()).to_string(),
            "Malformed query string: duplicate field `lat`"
        );
    }
}
