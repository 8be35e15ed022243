//! Running totals per category, kept in step with the writes that feed
//! them. The increment always runs inside the caller's transaction so a
//! failed summary update rolls back the originating write too.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{Summary, SummaryDelta};
pub use services::SummaryService;
