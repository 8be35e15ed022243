mod summary;

pub use summary::{Summary, SummaryDelta};
