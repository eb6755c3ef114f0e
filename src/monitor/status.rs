//! Operational status and the priority resolver.
//!
//! Exactly one status is reported per sampling tick even when several
//! conditions hold at once. The conditions live in a severity-ordered
//! rule table and the resolver returns the first that applies, so the
//! precedence is data a test can inspect rather than a property of
//! nested `if`s.
//!
//! | Status     | Condition (first match wins)                     |
//! |------------|--------------------------------------------------|
//! | `Error`    | Latest reading outside the sensor's valid range  |
//! | `DoorOpen` | Debounced door state is open                     |
//! | `TooWarm`  | Rolling average strictly above the threshold     |
//! | `Ok`       | None of the above                                |

use core::fmt;

/// Operational status, ordered by severity (`Ok` lowest, `Error` highest).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    #[default]
    Ok,
    TooWarm,
    DoorOpen,
    Error,
}

impl Status {
    /// Token used in the telemetry line and transition logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::TooWarm => "TOO_WARM",
            Self::DoorOpen => "DOOR_OPEN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the resolver considers for one sampling tick.
#[derive(Debug, Clone, Copy)]
pub struct StatusInput {
    /// Latest instantaneous reading is inside the sensor's valid range.
    pub reading_valid: bool,
    /// Debounced door state.
    pub door_open: bool,
    /// Rolling average (°C).
    pub average_c: f32,
    /// TOO_WARM threshold (°C), compared strictly.
    pub warm_threshold_c: f32,
}

/// One row of the priority table.
struct StatusRule {
    status: Status,
    applies: fn(&StatusInput) -> bool,
}

fn reading_invalid(input: &StatusInput) -> bool {
    !input.reading_valid
}

fn door_is_open(input: &StatusInput) -> bool {
    input.door_open
}

fn average_too_warm(input: &StatusInput) -> bool {
    input.average_c > input.warm_threshold_c
}

/// Highest severity first; [`resolve`] scans top to bottom.
const RULES: [StatusRule; 3] = [
    StatusRule { status: Status::Error, applies: reading_invalid },
    StatusRule { status: Status::DoorOpen, applies: door_is_open },
    StatusRule { status: Status::TooWarm, applies: average_too_warm },
];

/// Map one sampling tick's inputs to a status. Pure function.
///
/// Validity is judged on the instantaneous reading so a faulted sensor
/// surfaces immediately; warmth is judged on the average so transients
/// do not flicker the status.
pub fn resolve(input: &StatusInput) -> Status {
    RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map_or(Status::Ok, |rule| rule.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(reading_valid: bool, door_open: bool, average_c: f32) -> StatusInput {
        StatusInput {
            reading_valid,
            door_open,
            average_c,
            warm_threshold_c: 7.0,
        }
    }

    #[test]
    fn all_clear_is_ok() {
        assert_eq!(resolve(&input(true, false, 4.0)), Status::Ok);
    }

    #[test]
    fn invalid_reading_beats_everything() {
        assert_eq!(resolve(&input(false, true, 100.0)), Status::Error);
        assert_eq!(resolve(&input(false, false, 4.0)), Status::Error);
    }

    #[test]
    fn open_door_beats_too_warm() {
        assert_eq!(resolve(&input(true, true, 100.0)), Status::DoorOpen);
        assert_eq!(resolve(&input(true, true, 4.0)), Status::DoorOpen);
    }

    #[test]
    fn too_warm_requires_strictly_above_threshold() {
        assert_eq!(resolve(&input(true, false, 7.0)), Status::Ok);
        assert_eq!(resolve(&input(true, false, 7.01)), Status::TooWarm);
    }

    #[test]
    fn severity_order_is_total() {
        assert!(Status::Ok < Status::TooWarm);
        assert!(Status::TooWarm < Status::DoorOpen);
        assert!(Status::DoorOpen < Status::Error);
    }

    #[test]
    fn rules_sorted_by_strictly_decreasing_severity() {
        assert!(
            RULES.windows(2).all(|pair| pair[0].status > pair[1].status),
            "rule table must scan from most to least severe"
        );
    }

    #[test]
    fn display_tokens_match_report_contract() {
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::DoorOpen.to_string(), "DOOR_OPEN");
        assert_eq!(Status::TooWarm.to_string(), "TOO_WARM");
        assert_eq!(Status::Error.to_string(), "ERROR");
    }
}
