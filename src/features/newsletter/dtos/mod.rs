mod newsletter_dto;

pub use newsletter_dto::{SubscribeDto, SubscriberResponseDto, UnsubscribeDto};
