#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Synthetic bloom observation generator.
//!
//! Turns a center point, a radius, and a date range into a randomly sized
//! collection of randomly placed, randomly dated observations whose
//! intensity is biased toward the equator. The generator performs no I/O;
//! all randomness comes from a caller-supplied [`RandomSource`] so tests can
//! script exact draws.

mod source;

pub use source::{RandomSource, RngSource};

use bloom_data_observation_models::{
    BoundingBox, DateRange, Observation, ObservationCollection, Prediction, Trend, date_from_millis,
};

/// Fewest observations generated per call.
pub const MIN_OBSERVATIONS: i64 = 150;

/// Most observations generated per call.
pub const MAX_OBSERVATIONS: i64 = 350;

/// Parameters describing the region and period to synthesize data for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationRequest {
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Half-width of the bounding box in degrees.
    pub radius: f64,
    /// Inclusive range observation dates are drawn from.
    pub dates: DateRange,
}

impl ObservationRequest {
    /// The box observations are placed in.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.latitude, self.longitude, self.radius)
    }
}

/// Generates a collection using a freshly OS-seeded random source.
#[must_use]
pub fn generate_with_entropy(request: &ObservationRequest) -> ObservationCollection {
    generate(request, &mut RngSource::from_entropy())
}

/// Generates between [`MIN_OBSERVATIONS`] and [`MAX_OBSERVATIONS`]
/// observations inside the request's bounding box and date range.
///
/// Each observation consumes six draws from `source`, in order: latitude,
/// longitude, timestamp, intensity, trend, prediction. The collection size
/// is drawn once before any observation.
///
/// Never fails. An inverted date range is treated as if its bounds were
/// ordered; a negative radius draws points between the swapped bounds.
/// Points drawn beyond the poles (`|latitude| > 90`) get a negative
/// intensity, since [`latitude_factor`] goes below zero there.
pub fn generate(request: &ObservationRequest, source: &mut impl RandomSource) -> ObservationCollection {
    let count = uniform_int(source, MIN_OBSERVATIONS, MAX_OBSERVATIONS);
    let bbox = request.bounding_box();

    let (start_millis, end_millis) = ordered(request.dates.start_millis(), request.dates.end_millis());
    let fallback_date = request.dates.start.min(request.dates.end);

    let observations: Vec<Observation> = (0..count)
        .map(|_| {
            let latitude = uniform_float(source, bbox.south, bbox.north);
            let longitude = uniform_float(source, bbox.west, bbox.east);

            let timestamp = uniform_int(source, start_millis, end_millis);
            let date = date_from_millis(timestamp).unwrap_or(fallback_date);

            let intensity = source.next_f64() * latitude_factor(latitude);
            let trend = pick(source, Trend::all());
            let prediction = pick(source, Prediction::all());

            Observation {
                longitude,
                latitude,
                intensity,
                trend,
                prediction,
                date,
            }
        })
        .collect();

    log::debug!(
        "Generated {} observations around ({}, {}) radius={} from {} to {}",
        observations.len(),
        request.latitude,
        request.longitude,
        request.radius,
        request.dates.start,
        request.dates.end,
    );

    ObservationCollection::new(observations)
}

/// Equator bias: 1 at the equator, 0 at the poles.
#[must_use]
pub fn latitude_factor(latitude: f64) -> f64 {
    (90.0 - latitude.abs()) / 90.0
}

fn uniform_float(source: &mut impl RandomSource, min: f64, max: f64) -> f64 {
    source.next_f64().mul_add(max - min, min)
}

/// Uniform integer in `[lo, hi]`, bounds in either order.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn uniform_int(source: &mut impl RandomSource, lo: i64, hi: i64) -> i64 {
    let (lo, hi) = ordered(lo, hi);
    let span = (hi - lo).saturating_add(1) as f64;
    let offset = (source.next_f64() * span).floor() as i64;
    lo.saturating_add(offset).min(hi)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
fn pick<T: Copy>(source: &mut impl RandomSource, variants: &[T]) -> T {
    let idx = uniform_int(source, 0, variants.len() as i64 - 1) as usize;
    variants[idx]
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}
