// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated work durations
//!
//! No real work happens; participants sleep for a random fraction of these
//! upper bounds instead.

use super::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bounds for every simulated delay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pace {
    /// Producer time to make one item
    #[serde(with = "humantime_serde")]
    pub max_cooking: Duration,
    /// Consumer time per unit held, multiplied by the units
    #[serde(with = "humantime_serde")]
    pub max_eating_per_unit: Duration,
    /// Client time before reaching the waiting room
    #[serde(with = "humantime_serde")]
    pub max_travel: Duration,
    /// Server time for one encounter
    #[serde(with = "humantime_serde")]
    pub max_service: Duration,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            max_cooking: Duration::from_secs(20),
            max_eating_per_unit: Duration::from_secs(10),
            max_travel: Duration::from_secs(40),
            max_service: Duration::from_secs(20),
        }
    }
}

impl Pace {
    /// No delays at all
    pub fn instant() -> Self {
        Self {
            max_cooking: Duration::ZERO,
            max_eating_per_unit: Duration::ZERO,
            max_travel: Duration::ZERO,
            max_service: Duration::ZERO,
        }
    }

    /// Same shape, every bound multiplied by `factor`. A factor that pushes
    /// any bound past `Duration::MAX` is rejected.
    pub fn scaled(&self, factor: f64) -> Result<Self, ConfigError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ConfigError::InvalidScale(factor));
        }
        let scale = |bound: Duration| {
            Duration::try_from_secs_f64(bound.as_secs_f64() * factor)
                .map_err(|_| ConfigError::InvalidScale(factor))
        };
        Ok(Self {
            max_cooking: scale(self.max_cooking)?,
            max_eating_per_unit: scale(self.max_eating_per_unit)?,
            max_travel: scale(self.max_travel)?,
            max_service: scale(self.max_service)?,
        })
    }

    pub fn cooking(&self) -> Duration {
        sample(self.max_cooking)
    }

    pub fn eating(&self, units: u32) -> Duration {
        sample(self.max_eating_per_unit).saturating_mul(units)
    }

    pub fn travel(&self) -> Duration {
        sample(self.max_travel)
    }

    pub fn service(&self) -> Duration {
        sample(self.max_service)
    }
}

/// Uniform in `[0, max)` at millisecond resolution
fn sample(max: Duration) -> Duration {
    let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
    if max_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_pace_never_waits() {
        let pace = Pace::instant();
        assert_eq!(pace.cooking(), Duration::ZERO);
        assert_eq!(pace.eating(3), Duration::ZERO);
        assert_eq!(pace.travel(), Duration::ZERO);
        assert_eq!(pace.service(), Duration::ZERO);
    }

    #[test]
    fn samples_stay_below_bound() {
        let pace = Pace {
            max_cooking: Duration::from_millis(5),
            ..Pace::instant()
        };
        for _ in 0..100 {
            assert!(pace.cooking() < Duration::from_millis(5));
        }
    }

    #[test]
    fn eating_scales_with_units() {
        let pace = Pace {
            max_eating_per_unit: Duration::from_millis(10),
            ..Pace::instant()
        };
        assert_eq!(pace.eating(0), Duration::ZERO);
        for _ in 0..50 {
            let eating = pace.eating(3);
            assert!(eating < Duration::from_millis(30));
            assert_eq!(eating.as_millis() % 3, 0);
        }
    }

    #[test]
    fn scaled_divides_every_bound() {
        let pace = Pace::default().scaled(0.01).unwrap();
        assert_eq!(pace.max_cooking, Duration::from_millis(200));
        assert_eq!(pace.max_travel, Duration::from_millis(400));
    }

    #[test]
    fn scaled_rejects_negative_and_nan() {
        assert!(Pace::default().scaled(-1.0).is_err());
        assert!(Pace::default().scaled(f64::NAN).is_err());
    }

    #[test]
    fn scaled_rejects_overflowing_factor() {
        let err = Pace::default().scaled(1e20).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScale(f) if f == 1e20));
    }

    #[test]
    fn eating_saturates_instead_of_overflowing() {
        // Any per-unit sample above ~136 years overflows once multiplied.
        let pace = Pace {
            max_eating_per_unit: Duration::from_secs(u64::MAX / 1000),
            ..Pace::instant()
        };
        assert_eq!(pace.eating(u32::MAX), Duration::MAX);
    }
}
