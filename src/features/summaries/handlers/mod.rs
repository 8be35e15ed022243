mod summary_handler;

pub use summary_handler::*;
