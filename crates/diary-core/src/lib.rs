pub mod stats;
pub mod insights;
pub mod snapshot;
pub mod session;

pub use stats::{
    generate_roast, letter_meaning, personas, soundtrack_suggestions, streak_stats, type_code, Aggregates,
};
pub use insights::build_insights;
pub use snapshot::{build_dashboard, build_snapshot};
pub use session::Session;
