pub mod download;
pub mod exit;
pub mod submit;

pub use download::{download_challenge, download_input, download_problem};
pub use exit::exit_for_error;
pub use submit::{parse_answer, submit_final_day, submit_solution};
