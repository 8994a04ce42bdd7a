use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date_format::deserialize_date_prefix;

/// Response envelope shared by every dashboard endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: T,
}

/// Complete dataset consumed by the chart renderers and the insights report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    pub overview: Overview,
    pub evolution: Evolution,
    pub productivity: Productivity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub task_stats: Vec<StatusCount>,
    pub completed_this_month: u64,
    pub hours_stats: HoursStats,
    pub overdue_tasks: u64,
    pub due_this_week: u64,
    #[serde(default)]
    pub member_productivity: Vec<MemberProductivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_year: Option<i32>,
}

impl Overview {
    /// Sum of all per-status task counts
    pub fn total_tasks(&self) -> u64 {
        self.task_stats.iter().map(|s| s.count).sum()
    }

    /// Share of this month's completions over all counted tasks, in percent.
    /// The denominator is clamped to one so an empty project yields zero.
    pub fn completion_rate(&self) -> f64 {
        self.completed_this_month as f64 / self.total_tasks().max(1) as f64 * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursStats {
    pub estimated: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProductivity {
    pub user: Member,
    pub tasks_completed: u64,
    pub hours_worked: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evolution {
    pub monthly_evolution: Vec<MonthlyEvolution>,
    #[serde(default)]
    pub daily_completion: Vec<DailyCompletion>,
    pub priority_distribution: Vec<PriorityCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyEvolution {
    #[serde(deserialize_with = "deserialize_date_prefix")]
    pub month: NaiveDate,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub in_progress_tasks: u64,
    pub todo_tasks: u64,
    pub review_tasks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCompletion {
    #[serde(deserialize_with = "deserialize_date_prefix")]
    pub date: NaiveDate,
    pub completed_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Productivity {
    pub velocity: Vec<VelocityPoint>,
    pub time_accuracy: TimeAccuracy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityPoint {
    #[serde(deserialize_with = "deserialize_date_prefix")]
    pub date: NaiveDate,
    pub tasks_completed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAccuracy {
    pub average_estimated: f64,
    pub average_actual: f64,
    pub accuracy_percentage: f64,
    pub is_overestimated: bool,
}
