// Sample dashboard payload for demonstrations and offline runs
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::models::{
    DailyCompletion, Evolution, HoursStats, Member, MemberProductivity, MonthlyEvolution,
    Overview, Payload, PriorityCount, Productivity, StatusCount, TimeAccuracy, VelocityPoint,
};
use crate::utils::trailing_month_starts;

pub const DEFAULT_SAMPLE_MONTHS: u32 = 6;
pub const SAMPLE_DAYS: i64 = 30;
/// Daily completions are drawn from `0..MAX_DAILY_COMPLETIONS`
const MAX_DAILY_COMPLETIONS: u64 = 5;

/// Builds a payload with a fixed shape around a given "today".
///
/// Monthly counts grow linearly with the month index and daily completions are
/// random. Everything else is a fixed illustrative value.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    today: NaiveDate,
    months: u32,
    seed: Option<u64>,
}

impl SampleGenerator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            months: DEFAULT_SAMPLE_MONTHS,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    pub fn generate(&self) -> Payload {
        info!("Generating sample data for demonstration...");

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Payload {
            overview: sample_overview(),
            evolution: Evolution {
                monthly_evolution: self.monthly_evolution(),
                daily_completion: self.daily_completion(&mut rng),
                priority_distribution: vec![
                    priority("HIGH", 15),
                    priority("MEDIUM", 25),
                    priority("LOW", 10),
                ],
            },
            productivity: sample_productivity(),
        }
    }

    fn monthly_evolution(&self) -> Vec<MonthlyEvolution> {
        trailing_month_starts(self.today, self.months)
            .into_iter()
            .enumerate()
            .map(|(i, month)| {
                let i = i as u64;
                MonthlyEvolution {
                    month,
                    total_tasks: 20 + i * 5,
                    completed_tasks: 15 + i * 3,
                    in_progress_tasks: 3 + i,
                    todo_tasks: 2 + i,
                    review_tasks: 1,
                }
            })
            .collect()
    }

    fn daily_completion(&self, rng: &mut StdRng) -> Vec<DailyCompletion> {
        (0..SAMPLE_DAYS)
            .map(|i| DailyCompletion {
                date: self.today - Duration::days(SAMPLE_DAYS - 1 - i),
                completed_count: rng.gen_range(0..MAX_DAILY_COMPLETIONS),
            })
            .collect()
    }
}

fn status(code: &str, count: u64) -> StatusCount {
    StatusCount {
        status: code.to_string(),
        count,
    }
}

fn priority(code: &str, count: u64) -> PriorityCount {
    PriorityCount {
        priority: code.to_string(),
        count,
    }
}

fn member(id: &str, name: &str, tasks_completed: u64, hours_worked: f64) -> MemberProductivity {
    MemberProductivity {
        user: Member {
            id: id.to_string(),
            name: name.to_string(),
            avatar: Some(String::new()),
        },
        tasks_completed,
        hours_worked,
    }
}

fn sample_overview() -> Overview {
    Overview {
        task_stats: vec![
            status("COMPLETED", 45),
            status("IN_PROGRESS", 12),
            status("TODO", 8),
            status("IN_REVIEW", 3),
        ],
        completed_this_month: 15,
        hours_stats: HoursStats {
            estimated: 120.0,
            actual: 95.0,
        },
        overdue_tasks: 3,
        due_this_week: 7,
        member_productivity: vec![
            member("1", "João Silva", 8, 45.0),
            member("2", "Maria Santos", 7, 50.0),
        ],
        current_month: None,
        current_year: None,
    }
}

fn sample_productivity() -> Productivity {
    let velocity = [(1, 2), (2, 3), (3, 1), (4, 4), (5, 2)]
        .into_iter()
        .filter_map(|(day, tasks_completed)| {
            NaiveDate::from_ymd_opt(2024, 2, day).map(|date| VelocityPoint {
                date,
                tasks_completed,
            })
        })
        .collect();

    Productivity {
        velocity,
        time_accuracy: TimeAccuracy {
            average_estimated: 8.5,
            average_actual: 7.2,
            accuracy_percentage: 15.3,
            is_overestimated: true,
        },
    }
}
