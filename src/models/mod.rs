pub mod outcome;
pub mod puzzle;

pub use outcome::{FinaleOutcome, SubmissionOutcome, CONGRATULATIONS, RIGHT_ANSWER};
pub use puzzle::{Part, Puzzle};
