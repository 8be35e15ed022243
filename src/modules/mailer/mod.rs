//! Outgoing email over SMTP.
//!
//! HTML bodies are rendered from embedded minijinja templates. The
//! [`Mailer`] trait is the seam services depend on, so tests can substitute
//! a recording implementation. Delivery failures are the caller's to log;
//! nothing here retries.

pub mod smtp_mailer;
pub mod templates;

pub use smtp_mailer::{Mailer, OutgoingEmail, SmtpMailer};
