//! Component A: rule constants (§4.1). All figures are in minutes unless
//! noted otherwise.

/// Maximum minutes a driver may spend in `DutyStatus::Driving` within one duty period.
pub const DRIVE_LIMIT: i64 = 11 * 60;

/// Maximum minutes of on-duty time (driving + not-driving) within one duty period.
pub const WINDOW_LIMIT: i64 = 14 * 60;

/// Cumulative driving minutes since the last 30-minute break before one is mandatory.
pub const BREAK_TRIGGER: i64 = 8 * 60;

/// Length of the mandatory break triggered by `BREAK_TRIGGER`.
pub const BREAK_DURATION: i64 = 30;

/// Length of the off-duty reset that starts a new duty period.
pub const OFF_DUTY_RESET: i64 = 10 * 60;

/// Rolling 8-day on-duty/driving cycle limit.
pub const CYCLE_LIMIT: i64 = 70 * 60;

/// Distance between mandatory fuel stops.
pub const FUEL_INTERVAL_MILES: f64 = 1000.0;

/// Length of a fuel stop.
pub const FUEL_DURATION: i64 = 30;

/// Length of the pickup stop.
pub const PICKUP_DURATION: i64 = 60;

/// Length of the dropoff stop.
pub const DROPOFF_DURATION: i64 = 60;

/// Assumed average road speed, used only to estimate distance-to-next-fuel-stop.
pub const AVG_SPEED_MPH: f64 = 55.0;

/// Minutes in a calendar day, the day-sheet slice width.
pub const MINUTES_IN_DAY: i64 = 1440;
