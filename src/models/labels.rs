// Status and priority codes with their pt-BR display labels

/// Task status codes reported by the dashboard API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    InProgress,
    Todo,
    InReview,
}

impl TaskStatus {
    /// Parse a status code. The backend's `DONE` is treated as `COMPLETED`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "COMPLETED" | "DONE" => Some(TaskStatus::Completed),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "TODO" => Some(TaskStatus::Todo),
            "IN_REVIEW" => Some(TaskStatus::InReview),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Concluído",
            TaskStatus::InProgress => "Em Andamento",
            TaskStatus::Todo => "A Fazer",
            TaskStatus::InReview => "Em Revisão",
        }
    }
}

/// Task priority codes reported by the dashboard API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HIGH" => Some(Priority::High),
            "MEDIUM" => Some(Priority::Medium),
            "LOW" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Média",
            Priority::Low => "Baixa",
        }
    }
}

/// Display label for a raw status code, falling back to the code itself
pub fn status_label(code: &str) -> String {
    TaskStatus::from_code(code)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Display label for a raw priority code, falling back to the code itself
pub fn priority_label(code: &str) -> String {
    Priority::from_code(code)
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| code.to_string())
}
