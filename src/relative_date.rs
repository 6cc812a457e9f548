use chrono::{Days, NaiveDate, NaiveTime};

/// A parsed relative date label such as "Kemarin, 18:00" or "3 days ago".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDate {
    pub days_ago: u32,
    pub time: Option<NaiveTime>,
}

impl RelativeDate {
    /// Parse `<day part>[, HH:MM]`. Returns None for anything else.
    pub fn parse(label: &str) -> Option<Self> {
        let (day_part, time_part) = match label.split_once(',') {
            Some((day, time)) => (day, Some(time.trim())),
            None => (label, None),
        };

        let days_ago = parse_day_part(day_part.trim())?;
        let time = match time_part {
            Some(t) => Some(NaiveTime::parse_from_str(t, "%H:%M").ok()?),
            None => None,
        };

        Some(Self { days_ago, time })
    }

    /// Calendar date this label refers to, counted back from `today`
    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_sub_days(Days::new(u64::from(self.days_ago)))
    }
}

fn parse_day_part(day: &str) -> Option<u32> {
    let lower = day.to_lowercase();
    match lower.as_str() {
        "hari ini" | "today" => return Some(0),
        "kemarin" | "yesterday" => return Some(1),
        _ => {}
    }

    let tokens: Vec<&str> = lower.split_whitespace().collect();
    let (count, unit) = match tokens.as_slice() {
        [n, unit, "lalu"] | [n, unit, "ago"] => (n.parse::<u32>().ok()?, *unit),
        _ => return None,
    };

    match unit {
        "hari" | "day" | "days" => Some(count),
        "minggu" | "week" | "weeks" => count.checked_mul(7),
        _ => None,
    }
}
