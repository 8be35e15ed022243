use lazy_static::lazy_static;
use minijinja::{context, Environment};
use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};

lazy_static! {
    static ref TEMPLATES: Environment<'static> = {
        let mut env = Environment::new();
        env.add_template(
            "donation_receipt",
            include_str!("templates/donation_receipt.html"),
        )
        .expect("donation_receipt template is valid");
        env.add_template(
            "newsletter_welcome",
            include_str!("templates/newsletter_welcome.html"),
        )
        .expect("newsletter_welcome template is valid");
        env
    };
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String> {
    let template = TEMPLATES
        .get_template(name)
        .map_err(|e| AppError::Internal(format!("Missing email template {}: {}", name, e)))?;
    template
        .render(ctx)
        .map_err(|e| AppError::Internal(format!("Failed to render {}: {}", name, e)))
}

pub fn donation_receipt(
    donor_name: Option<&str>,
    amount: Decimal,
    currency: &str,
) -> Result<String> {
    render(
        "donation_receipt",
        context! {
            donor_name => donor_name.unwrap_or("Friend"),
            amount => amount.to_string(),
            currency => currency.to_uppercase(),
        },
    )
}

pub fn newsletter_welcome(name: Option<&str>) -> Result<String> {
    render(
        "newsletter_welcome",
        context! {
            name => name.unwrap_or("Friend"),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donation_receipt_renders_amount() {
        let html = donation_receipt(Some("Aisha"), Decimal::new(2_500, 2), "usd").unwrap();
        assert!(html.contains("Aisha"));
        assert!(html.contains("25.00"));
        assert!(html.contains("USD"));
    }

    #[test]
    fn test_newsletter_welcome_falls_back_to_friend() {
        let html = newsletter_welcome(None).unwrap();
        assert!(html.contains("Friend"));
    }
}
