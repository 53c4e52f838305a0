pub mod blocked;

pub use blocked::{BlockedIndex, CandidateBlock};
