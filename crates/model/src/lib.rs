pub mod day_sheet;
pub mod duty;
pub mod plan;
pub mod stop;
pub mod timeline;

pub use day_sheet::{DaySheet, Segment};
pub use duty::{DutyStatus, StopKind};
pub use plan::{Coordinates, LegOverride, PlanRequest, PlanResult};
pub use stop::StopEvent;
pub use timeline::TimelineEvent;
