mod newsletter_handler;

pub use newsletter_handler::*;
