use chrono::NaiveDate;

/// Priority tier derived from a task's due date, ordered for display:
/// urgent > high > medium > normal > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Normal,
    Medium,
    High,
    Urgent,
}

impl Urgency {
    /// Classify a due date against today, by calendar date only.
    ///
    /// A task due today is High even when its time of day has passed;
    /// only strictly earlier dates are Urgent.
    pub fn classify(due_date: NaiveDate, today: NaiveDate) -> Self {
        if due_date == today {
            return Self::High;
        }
        if due_date < today {
            return Self::Urgent;
        }
        match (due_date - today).num_days() {
            1..=2 => Self::Medium,
            3..=7 => Self::Normal,
            _ => Self::Low,
        }
    }
}

/// Display label matching the tier: "Overdue", "Due Today", "Due Soon",
/// "Due in N days", or the formatted due date for far-out tasks.
pub fn due_label(due_date: NaiveDate, today: NaiveDate) -> String {
    match Urgency::classify(due_date, today) {
        Urgency::High => "Due Today".to_string(),
        Urgency::Urgent => "Overdue".to_string(),
        Urgency::Medium => "Due Soon".to_string(),
        Urgency::Normal => format!("Due in {} days", (due_date - today).num_days()),
        Urgency::Low => due_date.format("%b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_dates_are_urgent() {
        let today = date(2026, 3, 10);
        assert_eq!(Urgency::classify(date(2026, 3, 9), today), Urgency::Urgent);
        assert_eq!(Urgency::classify(date(2025, 12, 31), today), Urgency::Urgent);
        assert_eq!(due_label(date(2026, 3, 9), today), "Overdue");
    }

    #[test]
    fn today_is_high_not_overdue() {
        let today = date(2026, 3, 10);
        assert_eq!(Urgency::classify(today, today), Urgency::High);
        assert_eq!(due_label(today, today), "Due Today");
    }

    #[test]
    fn one_to_two_days_out_is_medium() {
        let today = date(2026, 3, 10);
        assert_eq!(Urgency::classify(date(2026, 3, 11), today), Urgency::Medium);
        assert_eq!(Urgency::classify(date(2026, 3, 12), today), Urgency::Medium);
        assert_eq!(due_label(date(2026, 3, 12), today), "Due Soon");
    }

    #[test]
    fn three_to_seven_days_out_is_normal_with_count() {
        let today = date(2026, 3, 10);
        assert_eq!(Urgency::classify(date(2026, 3, 13), today), Urgency::Normal);
        assert_eq!(Urgency::classify(date(2026, 3, 17), today), Urgency::Normal);
        assert_eq!(due_label(date(2026, 3, 15), today), "Due in 5 days");
    }

    #[test]
    fn beyond_a_week_is_low_with_formatted_date() {
        let today = date(2026, 3, 10);
        assert_eq!(Urgency::classify(date(2026, 3, 18), today), Urgency::Low);
        assert_eq!(due_label(date(2026, 3, 18), today), "Mar 18, 2026");
    }

    #[test]
    fn tiers_order_for_display() {
        assert!(Urgency::Urgent > Urgency::High);
        assert!(Urgency::High > Urgency::Medium);
        assert!(Urgency::Medium > Urgency::Normal);
        assert!(Urgency::Normal > Urgency::Low);
    }
}
