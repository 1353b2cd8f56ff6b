pub mod config;
pub mod engine;
pub mod factors;
pub mod level;
pub mod record;
pub mod validation;

pub use config::*;
pub use engine::{Contribution, ScoringEngine};
pub use factors::{count_script_units, round2, visual_distance_from_counts, RangeOp};
pub use level::ProficiencyLevel;
pub use record::{Difficulty, DistanceProfile, RecordError, WordRecord};
pub use validation::validate_scoring;
