use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A driver's on-the-clock status at a single instant, per FMCSA's four
/// recognized duty statuses for property-carrying drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DutyStatus {
    #[serde(rename = "OFF_DUTY")]
    OffDuty,
    #[serde(rename = "SLEEPER")]
    Sleeper,
    #[serde(rename = "DRIVING")]
    Driving,
    #[serde(rename = "ON_DUTY_NOT_DRIVING")]
    OnDutyNotDriving,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF_DUTY",
            DutyStatus::Sleeper => "SLEEPER",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDutyNotDriving => "ON_DUTY_NOT_DRIVING",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DutyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFF_DUTY" => Ok(DutyStatus::OffDuty),
            "SLEEPER" => Ok(DutyStatus::Sleeper),
            "DRIVING" => Ok(DutyStatus::Driving),
            "ON_DUTY_NOT_DRIVING" => Ok(DutyStatus::OnDutyNotDriving),
            other => Err(format!("unknown duty status: {other}")),
        }
    }
}

/// The kind of a discrete, point-like stop the engine inserts into the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StopKind {
    #[serde(rename = "FUEL")]
    Fuel,
    #[serde(rename = "BREAK_30")]
    Break30,
    #[serde(rename = "OFF_DUTY_10")]
    OffDuty10,
    #[serde(rename = "PICKUP")]
    Pickup,
    #[serde(rename = "DROPOFF")]
    Dropoff,
}

impl StopKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopKind::Fuel => "FUEL",
            StopKind::Break30 => "BREAK_30",
            StopKind::OffDuty10 => "OFF_DUTY_10",
            StopKind::Pickup => "PICKUP",
            StopKind::Dropoff => "DROPOFF",
        }
    }

    /// The timeline status that must cover this stop kind's interval (§4.2).
    pub fn covering_status(&self) -> DutyStatus {
        match self {
            StopKind::Fuel => DutyStatus::OnDutyNotDriving,
            StopKind::Break30 => DutyStatus::OffDuty,
            StopKind::OffDuty10 => DutyStatus::Sleeper,
            StopKind::Pickup => DutyStatus::OnDutyNotDriving,
            StopKind::Dropoff => DutyStatus::OnDutyNotDriving,
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StopKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FUEL" => Ok(StopKind::Fuel),
            "BREAK_30" => Ok(StopKind::Break30),
            "OFF_DUTY_10" => Ok(StopKind::OffDuty10),
            "PICKUP" => Ok(StopKind::Pickup),
            "DROPOFF" => Ok(StopKind::Dropoff),
            other => Err(format!("unknown stop kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_status_round_trips_through_its_wire_name() {
        for status in [
            DutyStatus::OffDuty,
            DutyStatus::Sleeper,
            DutyStatus::Driving,
            DutyStatus::OnDutyNotDriving,
        ] {
            let parsed: DutyStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn stop_kind_maps_to_the_prescribed_covering_status() {
        assert_eq!(StopKind::Fuel.covering_status(), DutyStatus::OnDutyNotDriving);
        assert_eq!(StopKind::Break30.covering_status(), DutyStatus::OffDuty);
        assert_eq!(StopKind::OffDuty10.covering_status(), DutyStatus::Sleeper);
        assert_eq!(StopKind::Pickup.covering_status(), DutyStatus::OnDutyNotDriving);
        assert_eq!(StopKind::Dropoff.covering_status(), DutyStatus::OnDutyNotDriving);
    }
}
