mod error;
pub use error::{Error, Fault};

mod outcome;
pub use outcome::Outcome;

mod nothing;
pub use nothing::Nothing;

mod pending;
pub use pending::PendingOutcome;

#[cfg(test)]
mod test_service;
