mod stripe_client;

pub use stripe_client::{CheckoutSession, CheckoutSessionParams, StripeClient};
