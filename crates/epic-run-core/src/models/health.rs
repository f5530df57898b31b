// ABOUTME: Health data models for platform samples, synced aggregates, and the daily ledger
// ABOUTME: HealthDataType, HealthSample, HealthData, and DailyActivity definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::constants::health_sync::{DISTANCE_DECIMALS, STEPS_PER_ACTIVE_MINUTE};
use crate::constants::units::METERS_PER_KM;
use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use uuid::Uuid;

/// Kinds of samples a health platform can report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HealthDataType {
    /// Step count
    Steps,
    /// Distance walked or run, in meters
    Distance,
    /// Active energy burned, in kilocalories
    Calories,
    /// Heart rate, in beats per minute
    HeartRate,
    /// Body weight, in kilograms
    Weight,
}

impl Display for HealthDataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthDataType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steps" => Ok(Self::Steps),
            "distance" => Ok(Self::Distance),
            "calories" => Ok(Self::Calories),
            "heartRate" | "heart_rate" => Ok(Self::HeartRate),
            "weight" => Ok(Self::Weight),
            _ => Err(AppError::invalid_input(format!(
                "Invalid health data type: {s}"
            ))),
        }
    }
}

impl HealthDataType {
    /// Platform identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Distance => "distance",
            Self::Calories => "calories",
            Self::HeartRate => "heartRate",
            Self::Weight => "weight",
        }
    }
}

/// A single measurement reported by a health platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthSample {
    /// What was measured
    pub data_type: HealthDataType,
    /// Measured value in the platform unit for `data_type`
    pub value: f64,
    /// Platform unit label (e.g. `count`, `m`, `kcal`)
    pub unit: String,
    /// Start of the measurement window
    pub start_date: DateTime<Utc>,
    /// End of the measurement window
    pub end_date: DateTime<Utc>,
}

/// Aggregate activity for a time window, as produced by a health sync
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthData {
    /// Step count
    pub steps: u64,
    /// Distance in kilometers, rounded to two decimals
    pub distance_km: f64,
    /// Active calories
    pub calories: u64,
    /// Active minutes estimated from steps
    pub active_minutes: u64,
    /// When the data was read
    pub last_sync_time: DateTime<Utc>,
}

impl HealthData {
    /// Build an aggregate from summed raw platform values
    ///
    /// Distance is converted from meters and rounded to two decimals, steps and
    /// calories are rounded to integers, and active minutes are estimated as one
    /// minute per hundred steps.
    #[must_use]
    pub fn from_raw_totals(
        steps: f64,
        distance_meters: f64,
        calories: f64,
        synced_at: DateTime<Utc>,
    ) -> Self {
        let scale = 10_f64.powi(DISTANCE_DECIMALS);
        let distance_km = (distance_meters / METERS_PER_KM * scale).round() / scale;

        Self {
            steps: round_non_negative(steps),
            distance_km: distance_km.max(0.0),
            calories: round_non_negative(calories),
            active_minutes: round_non_negative(steps / STEPS_PER_ACTIVE_MINUTE),
            last_sync_time: synced_at,
        }
    }
}

fn round_non_negative(value: f64) -> u64 {
    // `as` saturates; NaN maps to 0
    value.round().max(0.0) as u64
}

/// One row of the per-day activity ledger
///
/// Each snapshot for a day replaces the synced figures. Manually logged
/// kilometers are tracked in `manual_distance_km` and survive replacement;
/// `distance_km` is the day's total including them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyActivity {
    /// Owner of the row
    pub user_id: Uuid,
    /// Calendar day the totals belong to
    pub day: NaiveDate,
    /// Steps taken that day
    pub steps: u64,
    /// Kilometers covered that day, manual runs included
    pub distance_km: f64,
    /// Portion of `distance_km` entered as manual runs
    #[serde(default)]
    pub manual_distance_km: f64,
    /// Active calories that day
    pub calories: u64,
    /// Active minutes that day
    pub active_minutes: u64,
}

impl DailyActivity {
    /// Ledger row for `day` built from a synced aggregate
    #[must_use]
    pub fn from_health_data(user_id: Uuid, day: NaiveDate, data: &HealthData) -> Self {
        Self {
            user_id,
            day,
            steps: data.steps,
            distance_km: data.distance_km,
            manual_distance_km: 0.0,
            calories: data.calories,
            active_minutes: data.active_minutes,
        }
    }

    /// Empty row for `day`
    #[must_use]
    pub const fn empty(user_id: Uuid, day: NaiveDate) -> Self {
        Self {
            user_id,
            day,
            steps: 0,
            distance_km: 0.0,
            manual_distance_km: 0.0,
            calories: 0,
            active_minutes: 0,
        }
    }

    /// Kilometers that came from a health platform sync
    #[must_use]
    pub fn synced_distance_km(&self) -> f64 {
        (self.distance_km - self.manual_distance_km).max(0.0)
    }

    /// Copy of `self` carrying the manual kilometers of `previous`
    #[must_use]
    pub fn with_manual_from(&self, previous: Option<&Self>) -> Self {
        let manual = previous.map_or(0.0, |prev| prev.manual_distance_km);
        Self {
            distance_km: self.synced_distance_km() + manual,
            manual_distance_km: manual,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_totals_are_converted_and_rounded() {
        let data = HealthData::from_raw_totals(8_449.6, 6_234.567, 312.4, Utc::now());

        assert_eq!(data.steps, 8_450);
        assert!((data.distance_km - 6.23).abs() < f64::EPSILON);
        assert_eq!(data.calories, 312);
        assert_eq!(data.active_minutes, 84);
    }

    #[test]
    fn test_zero_totals() {
        let data = HealthData::from_raw_totals(0.0, 0.0, 0.0, Utc::now());
        assert_eq!(data.steps, 0);
        assert!(data.distance_km.abs() < f64::EPSILON);
        assert_eq!(data.active_minutes, 0);
    }

    #[test]
    fn test_replacement_keeps_manual_distance() {
        let day = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let previous = DailyActivity {
            distance_km: 7.0,
            manual_distance_km: 5.0,
            ..DailyActivity::empty(Uuid::nil(), day)
        };
        let synced = DailyActivity {
            distance_km: 6.0,
            ..DailyActivity::empty(Uuid::nil(), day)
        };

        assert!((previous.synced_distance_km() - 2.0).abs() < f64::EPSILON);
        let stored = synced.with_manual_from(Some(&previous));
        assert!((stored.distance_km - 11.0).abs() < f64::EPSILON);
        assert!((stored.manual_distance_km - 5.0).abs() < f64::EPSILON);
        assert_eq!(synced.with_manual_from(None), synced);
    }

    #[test]
    fn test_data_type_identifiers() {
        assert_eq!(HealthDataType::HeartRate.as_str(), "heartRate");
        assert_eq!(
            "distance".parse::<HealthDataType>().unwrap(),
            HealthDataType::Distance
        );
        let json = serde_json::to_string(&HealthDataType::HeartRate).unwrap();
        assert_eq!(json, "\"heartRate\"");
    }
}
