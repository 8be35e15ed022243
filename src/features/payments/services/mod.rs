mod payment_service;

pub use payment_service::{minor_units, PaymentService, MINIMUM_CHARGE_MINOR_UNITS};
