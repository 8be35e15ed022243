mod subscriber;

pub use subscriber::NewsletterSubscriber;
