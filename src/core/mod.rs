pub mod match_result;
pub mod record;
pub mod roster;

pub use match_result::MatchResult;
pub use record::Record;
pub use roster::{load_roster, PlayerRow};
