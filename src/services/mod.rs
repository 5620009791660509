// Service exports
pub mod clock;
pub mod postgres;
pub mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use postgres::PgCandidateSource;
pub use source::{CandidateSource, InMemorySource, SourceError};
