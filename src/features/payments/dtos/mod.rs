mod payment_dto;

pub use payment_dto::{CheckoutResponseDto, CreateCheckoutDto};
