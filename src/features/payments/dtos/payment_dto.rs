use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{validate_currency_code, validate_positive_amount};

/// Request DTO for opening a checkout session
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutDto {
    /// Decimal amount in the major unit, e.g. 25.00
    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,

    /// ISO-4217 currency code, lowercase
    #[validate(custom(function = validate_currency_code))]
    pub currency: String,

    /// One-time payment when false, monthly subscription when true
    #[serde(default)]
    pub recurring: bool,

    #[validate(length(max = 255, message = "donorName must not exceed 255 characters"))]
    pub donor_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub donor_email: Option<String>,
}

/// Response DTO with the provider redirect
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponseDto {
    pub donation_id: i64,
    pub session_id: String,
    pub checkout_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    #[test]
    fn test_valid_checkout_dto() {
        let email: String = SafeEmail().fake();
        let dto = CreateCheckoutDto {
            amount: Decimal::new(2_500, 2),
            currency: "usd".to_string(),
            recurring: false,
            donor_name: Some("Omar".to_string()),
            donor_email: Some(email),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_uppercase_currency_rejected() {
        let dto = CreateCheckoutDto {
            amount: Decimal::new(2_500, 2),
            currency: "USD".to_string(),
            recurring: false,
            donor_name: None,
            donor_email: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let dto = CreateCheckoutDto {
            amount: Decimal::new(2_500, 2),
            currency: "usd".to_string(),
            recurring: false,
            donor_name: None,
            donor_email: Some("not-an-email".to_string()),
        };
        assert!(dto.validate().is_err());
    }
}
