// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod palette;
pub mod relative_date;
pub mod report;
pub mod repository;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod ui;
pub mod util;

pub use error::{HistoryError, Result};
pub use filter::HistoryFilter;
pub use history::{HistoryViewModel, ViewOptions};
pub use palette::intensity_color;
pub use repository::{InMemoryRepository, SessionRepository};
pub use session::{ActivityIcon, ExerciseSession, Intensity};
pub use stats::{compute_weekly_aggregate, WeeklyAggregate};
