//! Sensor package dispatch
//!
//! Maps the three-code workout tag to the matching variant constructor and
//! forwards the raw sample positionally. The tag table is a process-wide,
//! read-only static initialized on first use; unrecognized tags and
//! wrong-shape samples propagate as errors, never defaulting to a variant.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::errors::DispatchError;
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Short code identifying a workout variant in a sensor package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutTag {
    Run,
    Walk,
    Swim,
}

impl WorkoutTag {
    /// The wire code for this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutTag::Run => "RUN",
            WorkoutTag::Walk => "WLK",
            WorkoutTag::Swim => "SWM",
        }
    }
}

impl fmt::Display for WorkoutTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkoutTag {
    type Err = DispatchError;

    // Codes are exact; no case folding, no aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(WorkoutTag::Run),
            "WLK" => Ok(WorkoutTag::Walk),
            "SWM" => Ok(WorkoutTag::Swim),
            _ => Err(DispatchError::UnknownTag(s.to_string())),
        }
    }
}

type Constructor = fn(&[f64]) -> Result<Box<dyn Training>, DispatchError>;

/// Tag to constructor table, built once on first dispatch
static TAG_TABLE: Lazy<HashMap<WorkoutTag, Constructor>> = Lazy::new(|| {
    let mut table: HashMap<WorkoutTag, Constructor> = HashMap::new();
    table.insert(WorkoutTag::Run, |data| {
        Running::from_sample(data).map(|t| Box::new(t) as Box<dyn Training>)
    });
    table.insert(WorkoutTag::Walk, |data| {
        SportsWalking::from_sample(data).map(|t| Box::new(t) as Box<dyn Training>)
    });
    table.insert(WorkoutTag::Swim, |data| {
        Swimming::from_sample(data).map(|t| Box::new(t) as Box<dyn Training>)
    });
    table
});

/// Resolve one sensor package into a workout variant.
///
/// The raw data is forwarded positionally into the constructor selected by
/// the tag. Unknown tags and wrong-arity samples are fatal for the package
/// and propagate to the caller.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Box<dyn Training>, DispatchError> {
    let tag = tag.parse::<WorkoutTag>()?;
    // The table is total over WorkoutTag, so indexing cannot miss
    let construct = TAG_TABLE[&tag];
    construct(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_dispatch_selects_matching_variant() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(workout.label(), "Swimming");
        assert!((workout.calories_kcal() - 336.0).abs() < 1e-6);

        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout.label(), "Running");

        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(workout.label(), "SportsWalking");
    }

    #[rstest]
    #[case("XYZ")]
    #[case("run")]
    #[case("SWIM")]
    #[case("")]
    fn test_unknown_tag_fails(#[case] tag: &str) {
        let err = read_package(tag, &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap_err();
        assert_eq!(err, DispatchError::UnknownTag(tag.to_string()));
    }

    #[test]
    fn test_dispatch_rejects_wrong_arity() {
        let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::SampleShape {
                tag: "RUN",
                expected: 3,
                got: 4,
            }
        );
    }

    #[test]
    fn test_tag_code_roundtrip() {
        for tag in [WorkoutTag::Run, WorkoutTag::Walk, WorkoutTag::Swim] {
            assert_eq!(tag.as_str().parse::<WorkoutTag>().unwrap(), tag);
            assert_eq!(format!("{}", tag), tag.as_str());
        }
    }

    #[test]
    fn test_tag_table_covers_all_tags() {
        for tag in [WorkoutTag::Run, WorkoutTag::Walk, WorkoutTag::Swim] {
            assert!(TAG_TABLE.contains_key(&tag), "{}", tag);
        }
    }

    #[test]
    fn test_dispatched_workout_is_debuggable() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!(format!("{:?}", workout).contains("Swimming"));
    }
}
