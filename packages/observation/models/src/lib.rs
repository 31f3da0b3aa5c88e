#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Observation and category types for synthetic bloom data.
//!
//! These are the plain data types produced by the synthetic observation
//! generator and consumed by the API server. An [`ObservationCollection`]
//! converts into a `GeoJSON` [`FeatureCollection`] whose features carry
//! `intensity`, `trend`, `prediction`, and `date` properties.

use chrono::{DateTime, NaiveDate, NaiveTime};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Format used for observation dates in API responses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of the bloom timing shift relative to the historical norm.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Trend {
    /// Blooming ahead of the historical average.
    Earlier,
    /// No meaningful shift.
    Stable,
    /// Blooming behind the historical average.
    Later,
}

impl Trend {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Earlier, Self::Stable, Self::Later]
    }
}

/// Predicted magnitude of change for the coming season.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Prediction {
    /// Large expected shift.
    Significant,
    /// Noticeable expected shift.
    Moderate,
    /// Small expected shift.
    Slight,
    /// No expected shift.
    NoChange,
}

impl Prediction {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Significant,
            Self::Moderate,
            Self::Slight,
            Self::NoChange,
        ]
    }
}

/// A geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Builds the square box extending `radius` degrees from the center in
    /// each direction.
    ///
    /// A negative `radius` produces a box whose minimum and maximum bounds
    /// are swapped.
    #[must_use]
    pub fn around(latitude: f64, longitude: f64, radius: f64) -> Self {
        Self::new(
            longitude - radius,
            latitude - radius,
            longitude + radius,
            latitude + radius,
        )
    }
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range.
    pub start: NaiveDate,
    /// Last date in the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `start` is after `end`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Milliseconds since the Unix epoch at UTC midnight of `start`.
    #[must_use]
    pub fn start_millis(&self) -> i64 {
        midnight_millis(self.start)
    }

    /// Milliseconds since the Unix epoch at UTC midnight of `end`.
    #[must_use]
    pub fn end_millis(&self) -> i64 {
        midnight_millis(self.end)
    }
}

fn midnight_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Converts an epoch-millisecond timestamp to its UTC calendar date.
///
/// Returns `None` if the timestamp is outside the representable range.
#[must_use]
pub fn date_from_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// A single synthetic bloom observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Bloom intensity in `[0, 1)`.
    pub intensity: f64,
    /// Timing trend.
    pub trend: Trend,
    /// Predicted change.
    pub prediction: Prediction,
    /// Observation date, day precision.
    pub date: NaiveDate,
}

impl Observation {
    /// The observation date rendered as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    fn properties(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        properties.insert("intensity".to_string(), self.intensity.into());
        properties.insert("trend".to_string(), self.trend.as_ref().into());
        properties.insert("prediction".to_string(), self.prediction.as_ref().into());
        properties.insert("date".to_string(), self.date_string().into());
        properties
    }
}

impl From<&Observation> for Feature {
    fn from(observation: &Observation) -> Self {
        Self {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![
                observation.longitude,
                observation.latitude,
            ]))),
            id: None,
            properties: Some(observation.properties()),
            foreign_members: None,
        }
    }
}

/// An ordered set of observations generated for a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationCollection {
    /// Observations in generation order.
    pub observations: Vec<Observation>,
}

impl ObservationCollection {
    /// Wraps the given observations.
    #[must_use]
    pub const fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the collection has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Iterates over the observations in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

impl<'a> IntoIterator for &'a ObservationCollection {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&ObservationCollection> for FeatureCollection {
    fn from(collection: &ObservationCollection) -> Self {
        Self {
            bbox: None,
            features: collection.iter().map(Feature::from).collect(),
            foreign_members: None,
        }
    }
}
