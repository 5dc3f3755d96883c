use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task::Task;
use super::thought::Thought;
use super::urgency::Urgency;

/// Which suggestion engine the dashboard runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStrategy {
    /// Deterministic local rules, evaluated in strict priority order.
    #[default]
    LocalRules,
    /// Defer to the remote suggest-task endpoint.
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SuggestionPriority {
    Low,
    Medium,
    High,
}

/// A single prioritized recommendation surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub priority: SuggestionPriority,
    pub icon: &'static str,
}

const REFLECTIVE_POOL: [(&str, &str); 3] = [
    (
        "Take a 15-minute walk",
        "A short break clears your head before the next task.",
    ),
    (
        "Write down one thing you're grateful for",
        "Capture it as a thought while it's fresh.",
    ),
    (
        "Review what you finished this week",
        "Your completed list is a better mood boost than it sounds.",
    ),
];

/// Produce exactly one suggestion from the current thoughts and incomplete
/// tasks. Rules are evaluated in order; the first match wins.
pub fn suggest(thoughts: &[Thought], incomplete: &[Task], today: NaiveDate) -> Suggestion {
    if thoughts.is_empty() && incomplete.is_empty() {
        return Suggestion {
            title: "Write your first thought".to_string(),
            description: "Log what's on your mind or add a task to get started.".to_string(),
            priority: SuggestionPriority::Low,
            icon: "sunrise",
        };
    }

    let overdue = incomplete
        .iter()
        .filter(|t| Urgency::classify(t.due_date, today) == Urgency::Urgent)
        .count();
    if overdue > 0 {
        return Suggestion {
            title: format!("Clear {} overdue {}", overdue, plural(overdue, "task", "tasks")),
            description: "Overdue items weigh on everything else. Knock one out or reschedule it."
                .to_string(),
            priority: SuggestionPriority::High,
            icon: "alert",
        };
    }

    let due_today = incomplete
        .iter()
        .filter(|t| Urgency::classify(t.due_date, today) == Urgency::High)
        .count();
    if due_today > 0 {
        return Suggestion {
            title: format!(
                "{} {} due today",
                due_today,
                plural(due_today, "task is", "tasks are")
            ),
            description: "Start with the one you've been avoiding.".to_string(),
            priority: SuggestionPriority::Medium,
            icon: "calendar",
        };
    }

    if incomplete.len() > 5 {
        return Suggestion {
            title: "Trim your to-do list".to_string(),
            description: format!(
                "{} tasks in flight is a lot. Finish or drop a few before adding more.",
                incomplete.len()
            ),
            priority: SuggestionPriority::Medium,
            icon: "layers",
        };
    }

    let (title, description) = REFLECTIVE_POOL[pool_index(thoughts, incomplete)];
    Suggestion {
        title: title.to_string(),
        description: description.to_string(),
        priority: SuggestionPriority::Low,
        icon: "sparkles",
    }
}

/// Deterministic pick from the reflective pool: stable for a fixed data
/// set, varies as thoughts and tasks change.
fn pool_index(thoughts: &[Thought], incomplete: &[Task]) -> usize {
    let mut hasher = DefaultHasher::new();
    for thought in thoughts {
        thought.id.hash(&mut hasher);
    }
    for task in incomplete {
        task.id.hash(&mut hasher);
    }
    (hasher.finish() % REFLECTIVE_POOL.len() as u64) as usize
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
