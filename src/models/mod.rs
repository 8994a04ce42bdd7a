// Models module
pub mod labels;
pub mod payload;

pub use labels::{Priority, TaskStatus, priority_label, status_label};
pub use payload::{
    ApiEnvelope, DailyCompletion, Evolution, HoursStats, Member, MemberProductivity,
    MonthlyEvolution, Overview, Payload, PriorityCount, Productivity, StatusCount, TimeAccuracy,
    VelocityPoint,
};
