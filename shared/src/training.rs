//! Workout variants and their formula sets
//!
//! The three workout kinds share a base contract (distance derived from the
//! sensor action count, mean speed derived from distance and duration) and
//! each supplies its own calorie formula. Swimming additionally overrides the
//! stroke length and derives speed from pool geometry instead of distance.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every metric is a pure function of the sample
//! 2. **Immutable Variants**: a variant is built once per report and discarded
//! 3. **Closed Set**: exactly three implementors, no open-ended hierarchy

use std::fmt;

use crate::errors::DispatchError;
use crate::report::TrainingReport;

// ============================================================================
// Shared Constants
// ============================================================================

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_PER_HOUR: f64 = 60.0;

/// Step length in meters for running and walking
pub const STEP_LENGTH_M: f64 = 0.65;

/// Stroke length in meters for swimming
pub const STROKE_LENGTH_M: f64 = 1.38;

// ============================================================================
// Capability Contract
// ============================================================================

/// Common capability contract for one recorded workout.
///
/// Default methods carry the shared distance and speed formulas; variants
/// override only what differs. All metrics are total: degenerate inputs
/// (non-positive duration, negative action count) yield defined zero values
/// rather than errors.
pub trait Training: fmt::Debug {
    /// Raw sensor action count (steps or strokes)
    fn action_count(&self) -> i64;

    /// Session duration in hours
    fn duration_hours(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Variant name used as the report label
    fn label(&self) -> &'static str;

    /// Length of one action (step or stroke) in meters
    fn action_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered in kilometers.
    ///
    /// A negative action count clamps to zero distance instead of going
    /// negative.
    fn distance_km(&self) -> f64 {
        if self.action_count() < 0 {
            return 0.0;
        }
        self.action_count() as f64 * self.action_length_m() / M_IN_KM
    }

    /// Mean speed in km/h; zero for a non-positive duration.
    fn mean_speed_kmh(&self) -> f64 {
        if self.duration_hours() > 0.0 {
            self.distance_km() / self.duration_hours()
        } else {
            0.0
        }
    }

    /// Calories burned over the session, in kcal.
    ///
    /// Every variant formula carries its own non-positive-duration guard,
    /// independent of the speed guard, and returns zero in that case.
    fn calories_kcal(&self) -> f64;

    /// Assemble the derived metrics into a report.
    fn report(&self) -> TrainingReport {
        TrainingReport {
            label: self.label().to_string(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            avg_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

// ============================================================================
// Running
// ============================================================================

/// Running workout: steps, duration and weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action_count: i64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    /// Build from a positional sample: `[action_count, duration_hours, weight_kg]`
    pub fn from_sample(data: &[f64]) -> Result<Self, DispatchError> {
        match data {
            [action, duration, weight] => Ok(Self {
                action_count: *action as i64,
                duration_hours: *duration,
                weight_kg: *weight,
            }),
            _ => Err(DispatchError::SampleShape {
                tag: "RUN",
                expected: 3,
                got: data.len(),
            }),
        }
    }
}

impl Training for Running {
    fn action_count(&self) -> i64 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn label(&self) -> &'static str {
        "Running"
    }

    /// `(18 × speed + 1.79) × weight / 1000 × minutes`
    fn calories_kcal(&self) -> f64 {
        if self.duration_hours <= 0.0 {
            return 0.0;
        }
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * (self.duration_hours * MIN_PER_HOUR)
    }
}

// ============================================================================
// Sports Walking
// ============================================================================

/// Sports walking workout: steps, duration, weight and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub action_count: i64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    const WEIGHT_COEFFICIENT: f64 = 0.035;
    const SPEED_COEFFICIENT: f64 = 0.029;
    const KMH_TO_MS: f64 = 0.278;
    const CM_PER_M: f64 = 100.0;

    /// Build from a positional sample:
    /// `[action_count, duration_hours, weight_kg, height_cm]`
    pub fn from_sample(data: &[f64]) -> Result<Self, DispatchError> {
        match data {
            [action, duration, weight, height] => Ok(Self {
                action_count: *action as i64,
                duration_hours: *duration,
                weight_kg: *weight,
                height_cm: *height,
            }),
            _ => Err(DispatchError::SampleShape {
                tag: "WLK",
                expected: 4,
                got: data.len(),
            }),
        }
    }
}

impl Training for SportsWalking {
    fn action_count(&self) -> i64 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    /// `(0.035 × weight + speed_ms² / height_m × 0.029 × weight) × minutes`
    /// with speed converted to m/s and height to meters
    fn calories_kcal(&self) -> f64 {
        if self.duration_hours <= 0.0 {
            return 0.0;
        }
        let speed_ms = self.mean_speed_kmh() * Self::KMH_TO_MS;
        let height_m = self.height_cm / Self::CM_PER_M;
        (Self::WEIGHT_COEFFICIENT * self.weight_kg
            + speed_ms.powi(2) / height_m * Self::SPEED_COEFFICIENT * self.weight_kg)
            * (self.duration_hours * MIN_PER_HOUR)
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Swimming workout: strokes, duration, weight and pool geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action_count: i64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: f64,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const SPEED_MULTIPLIER: f64 = 2.0;

    /// Build from a positional sample:
    /// `[action_count, duration_hours, weight_kg, pool_length_m, pool_laps]`
    pub fn from_sample(data: &[f64]) -> Result<Self, DispatchError> {
        match data {
            [action, duration, weight, pool_length, pool_laps] => Ok(Self {
                action_count: *action as i64,
                duration_hours: *duration,
                weight_kg: *weight,
                pool_length_m: *pool_length,
                pool_laps: *pool_laps,
            }),
            _ => Err(DispatchError::SampleShape {
                tag: "SWM",
                expected: 5,
                got: data.len(),
            }),
        }
    }
}

impl Training for Swimming {
    fn action_count(&self) -> i64 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    /// Speed from pool geometry, not strokes:
    /// `pool_length × laps / 1000 / duration`
    fn mean_speed_kmh(&self) -> f64 {
        if self.duration_hours > 0.0 {
            self.pool_length_m * self.pool_laps / M_IN_KM / self.duration_hours
        } else {
            0.0
        }
    }

    /// `(speed + 1.1) × 2 × weight × duration`
    fn calories_kcal(&self) -> f64 {
        if self.duration_hours <= 0.0 {
            return 0.0;
        }
        (self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * Self::SPEED_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}
