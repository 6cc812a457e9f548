use crate::error::Result;
use crate::session::{ActivityIcon, ExerciseSession, Intensity};

/// Source of the session collection shown by the history view
pub trait SessionRepository {
    /// Sessions in presentation order, most recent first
    fn load(&self) -> Result<Vec<ExerciseSession>>;
}

/// Fixed in-memory collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    sessions: Vec<ExerciseSession>,
}

impl InMemoryRepository {
    pub fn new(sessions: Vec<ExerciseSession>) -> Self {
        Self { sessions }
    }

    /// The six sample sessions the history screen ships with
    pub fn seed() -> Self {
        Self::new(seed_sessions())
    }
}

impl SessionRepository for InMemoryRepository {
    fn load(&self) -> Result<Vec<ExerciseSession>> {
        Ok(self.sessions.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u32,
    kind: &str,
    duration: &str,
    date: &str,
    calories: u32,
    bpm: u16,
    o2: u8,
    icon: ActivityIcon,
    intensity: &str,
) -> ExerciseSession {
    ExerciseSession {
        id,
        kind: kind.to_string(),
        duration_label: duration.to_string(),
        date_label: date.to_string(),
        calories_burned: calories,
        heart_rate_avg_bpm: bpm,
        oxygen_avg_percent: o2,
        intensity: Intensity::from_label(intensity),
        icon,
    }
}

pub fn seed_sessions() -> Vec<ExerciseSession> {
    vec![
        sample(
            1,
            "Lari Pagi",
            "45 menit",
            "Hari ini, 06:30",
            320,
            145,
            96,
            ActivityIcon::Run,
            "Sedang",
        ),
        sample(
            2,
            "Yoga",
            "30 menit",
            "Kemarin, 18:00",
            120,
            85,
            98,
            ActivityIcon::Yoga,
            "Ringan",
        ),
        sample(
            3,
            "Bersepeda",
            "60 menit",
            "2 hari lalu, 16:00",
            450,
            135,
            97,
            ActivityIcon::Cycling,
            "Tinggi",
        ),
        sample(
            4,
            "Push-up",
            "20 menit",
            "3 hari lalu, 07:00",
            180,
            120,
            95,
            ActivityIcon::Strength,
            "Sedang",
        ),
        sample(
            5,
            "Berenang",
            "40 menit",
            "4 hari lalu, 17:30",
            380,
            140,
            96,
            ActivityIcon::Swim,
            "Tinggi",
        ),
        sample(
            6,
            "Jalan Santai",
            "25 menit",
            "5 hari lalu, 19:00",
            100,
            95,
            99,
            ActivityIcon::Walk,
            "Ringan",
        ),
    ]
}
