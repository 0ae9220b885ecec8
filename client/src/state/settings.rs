//! Trip settings form model and validation.
//!
//! DESIGN
//! ======
//! `SettingsForm` keeps the raw input strings exactly as typed so the form
//! can re-render whatever the user entered. `validate` produces one `Result`
//! per field, which lets the form show every problem at once, while
//! `into_settings` collapses them into a typed `TripSettings`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::num::{ParseFloatError, ParseIntError};
use std::ops::{Bound, RangeBounds};

const CLOSENESS_BIAS_RANGE: std::ops::RangeInclusive<f64> = 0.2..=5.0;
const MINIMUM_RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;
const NUMBER_TO_GENERATE_MAX: usize = 15;

/// Unit the maximum trip distance is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceUnit {
    Centimeters,
    Meters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    #[default]
    Miles,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 7] = [
        DistanceUnit::Centimeters,
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Inches,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::Miles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Centimeters => "Centimeters",
            DistanceUnit::Meters => "Meters",
            DistanceUnit::Kilometers => "Kilometers",
            DistanceUnit::Inches => "Inches",
            DistanceUnit::Feet => "Feet",
            DistanceUnit::Yards => "Yards",
            DistanceUnit::Miles => "Miles",
        }
    }

    /// Parse a `<select>` value. Anything unrecognized means miles.
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|unit| unit.as_str() == raw.trim()).unwrap_or_default()
    }
}

/// Form fields, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Longitude,
    Latitude,
    DistanceUnit,
    MaxDistance,
    ClosenessBias,
    MinimumRating,
    NumberToGenerate,
}

impl SettingsField {
    /// `name`/`id` attribute of the field's input.
    pub fn name(self) -> &'static str {
        match self {
            SettingsField::Longitude => "longitude",
            SettingsField::Latitude => "latitude",
            SettingsField::DistanceUnit => "distance_unit",
            SettingsField::MaxDistance => "max_distance",
            SettingsField::ClosenessBias => "closeness_bias",
            SettingsField::MinimumRating => "minimum_rating",
            SettingsField::NumberToGenerate => "number_to_generate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Longitude => "Longitude",
            SettingsField::Latitude => "Latitude",
            SettingsField::DistanceUnit => "Distance Unit",
            SettingsField::MaxDistance => "Max Distance",
            SettingsField::ClosenessBias => "Closeness Bias",
            SettingsField::MinimumRating => "Minimum Rating",
            SettingsField::NumberToGenerate => "Number To Generate",
        }
    }
}

/// Why a settings field was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    ParseFloat(#[from] ParseFloatError),
    #[error("{0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Out of Range. {}", describe_bounds(.0, .1))]
    OutOfRange(Bound<f64>, Bound<f64>),
}

fn describe_bounds(min: &Bound<f64>, max: &Bound<f64>) -> String {
    let min = match min {
        Bound::Included(bound) => format!("Min: {bound}"),
        Bound::Excluded(bound) => format!("Min (exclusive): {bound}"),
        Bound::Unbounded => "Min: Unbounded".to_owned(),
    };
    let max = match max {
        Bound::Included(bound) => format!("Max: {bound}"),
        Bound::Excluded(bound) => format!("Max (exclusive): {bound}"),
        Bound::Unbounded => "Max: Unbounded".to_owned(),
    };
    format!("{min} to {max}")
}

fn out_of_range<R: RangeBounds<f64>>(range: &R) -> SettingsError {
    SettingsError::OutOfRange(range.start_bound().cloned(), range.end_bound().cloned())
}

fn parse_f64_in<R: RangeBounds<f64>>(raw: &str, range: &R) -> Result<f64, SettingsError> {
    let value = raw.trim().parse::<f64>()?;
    if range.contains(&value) { Ok(value) } else { Err(out_of_range(range)) }
}

/// Validated, typed trip settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TripSettings {
    pub longitude: f64,
    pub latitude: f64,
    pub distance_unit: DistanceUnit,
    pub max_distance: f64,
    pub closeness_bias: f64,
    pub minimum_rating: f64,
    pub number_to_generate: usize,
}

impl Default for TripSettings {
    fn default() -> Self {
        Self {
            longitude: 0.0,
            latitude: 0.0,
            distance_unit: DistanceUnit::Miles,
            max_distance: 10.0,
            closeness_bias: 1.0,
            minimum_rating: 0.0,
            number_to_generate: 5,
        }
    }
}

impl TripSettings {
    /// Render as the raw strings the form inputs hold.
    pub fn to_form(&self) -> SettingsForm {
        SettingsForm {
            longitude: self.longitude.to_string(),
            latitude: self.latitude.to_string(),
            distance_unit: self.distance_unit.as_str().to_owned(),
            max_distance: self.max_distance.to_string(),
            closeness_bias: self.closeness_bias.to_string(),
            minimum_rating: self.minimum_rating.to_string(),
            number_to_generate: self.number_to_generate.to_string(),
        }
    }
}

/// Raw form input, one string per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub longitude: String,
    pub latitude: String,
    pub distance_unit: String,
    pub max_distance: String,
    pub closeness_bias: String,
    pub minimum_rating: String,
    pub number_to_generate: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        TripSettings::default().to_form()
    }
}

impl SettingsForm {
    pub fn validate(&self) -> SettingsValidation {
        #[allow(clippy::cast_precision_loss)]
        let count_range = 0.0..=NUMBER_TO_GENERATE_MAX as f64;
        let number_to_generate = self
            .number_to_generate
            .trim()
            .parse::<usize>()
            .map_err(SettingsError::from)
            .and_then(|n| if n <= NUMBER_TO_GENERATE_MAX { Ok(n) } else { Err(out_of_range(&count_range)) });

        SettingsValidation {
            longitude: parse_f64_in(&self.longitude, &..),
            latitude: parse_f64_in(&self.latitude, &..),
            distance_unit: DistanceUnit::parse(&self.distance_unit),
            max_distance: parse_f64_in(&self.max_distance, &(0.0..)),
            closeness_bias: parse_f64_in(&self.closeness_bias, &CLOSENESS_BIAS_RANGE),
            minimum_rating: parse_f64_in(&self.minimum_rating, &MINIMUM_RATING_RANGE),
            number_to_generate,
        }
    }
}

/// Per-field validation result of a `SettingsForm`.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsValidation {
    pub longitude: Result<f64, SettingsError>,
    pub latitude: Result<f64, SettingsError>,
    pub distance_unit: DistanceUnit,
    pub max_distance: Result<f64, SettingsError>,
    pub closeness_bias: Result<f64, SettingsError>,
    pub minimum_rating: Result<f64, SettingsError>,
    pub number_to_generate: Result<usize, SettingsError>,
}

impl SettingsValidation {
    pub fn has_error(&self) -> bool {
        self.longitude.is_err()
            || self.latitude.is_err()
            || self.max_distance.is_err()
            || self.closeness_bias.is_err()
            || self.minimum_rating.is_err()
            || self.number_to_generate.is_err()
    }

    /// Message to show under `field`, if it failed.
    pub fn message(&self, field: SettingsField) -> Option<String> {
        let err = match field {
            SettingsField::Longitude => self.longitude.as_ref().err(),
            SettingsField::Latitude => self.latitude.as_ref().err(),
            SettingsField::DistanceUnit => None,
            SettingsField::MaxDistance => self.max_distance.as_ref().err(),
            SettingsField::ClosenessBias => self.closeness_bias.as_ref().err(),
            SettingsField::MinimumRating => self.minimum_rating.as_ref().err(),
            SettingsField::NumberToGenerate => self.number_to_generate.as_ref().err(),
        };
        err.map(ToString::to_string)
    }

    /// Typed settings, or the first failing field's error in render order.
    pub fn into_settings(self) -> Result<TripSettings, SettingsError> {
        Ok(TripSettings {
            longitude: self.longitude?,
            latitude: self.latitude?,
            distance_unit: self.distance_unit,
            max_distance: self.max_distance?,
            closeness_bias: self.closeness_bias?,
            minimum_rating: self.minimum_rating?,
            number_to_generate: self.number_to_generate?,
        })
    }
}
