use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::donations::{dtos as donations_dtos, handlers as donations_handlers};
use crate::features::newsletter::{dtos as newsletter_dtos, handlers as newsletter_handlers};
use crate::features::payments::{dtos as payments_dtos, handlers as payments_handlers};
use crate::features::qr::handlers as qr_handlers;
use crate::features::reports::{dtos as reports_dtos, models as reports_models};
use crate::features::summaries::models as summaries_models;
use crate::shared::types::{ApiResponse, Pagination};

// The generic report handlers cannot carry #[utoipa::path] annotations;
// their request/response schemas are still registered below so the
// documented shapes match what the API serves.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Donations
        donations_handlers::list_donations,
        donations_handlers::get_donation,
        // Payments
        payments_handlers::create_checkout,
        payments_handlers::stripe_webhook,
        // Newsletter (public)
        newsletter_handlers::subscribe,
        newsletter_handlers::unsubscribe,
        // QR (public)
        qr_handlers::qr_svg,
        qr_handlers::qr_png,
        // Summaries
        crate::features::summaries::handlers::list_summaries,
    ),
    components(
        schemas(
            // Shared
            Pagination,
            auth::model::AuthenticatedUser,
            // Report resources
            reports_models::RationReport,
            reports_models::EducationReport,
            reports_models::TrainingReport,
            reports_models::ProcurementReport,
            reports_models::FinancialAssistanceReport,
            reports_dtos::CreateRationReportDto,
            reports_dtos::UpdateRationReportDto,
            reports_dtos::CreateEducationReportDto,
            reports_dtos::UpdateEducationReportDto,
            reports_dtos::CreateTrainingReportDto,
            reports_dtos::UpdateTrainingReportDto,
            reports_dtos::CreateProcurementReportDto,
            reports_dtos::UpdateProcurementReportDto,
            reports_dtos::CreateFinancialAssistanceReportDto,
            reports_dtos::UpdateFinancialAssistanceReportDto,
            ApiResponse<reports_models::RationReport>,
            ApiResponse<Vec<reports_models::RationReport>>,
            // Donations
            donations_dtos::DonationResponseDto,
            ApiResponse<Vec<donations_dtos::DonationResponseDto>>,
            ApiResponse<donations_dtos::DonationResponseDto>,
            // Payments
            payments_dtos::CreateCheckoutDto,
            payments_dtos::CheckoutResponseDto,
            ApiResponse<payments_dtos::CheckoutResponseDto>,
            // Newsletter
            newsletter_dtos::SubscribeDto,
            newsletter_dtos::UnsubscribeDto,
            newsletter_dtos::SubscriberResponseDto,
            ApiResponse<newsletter_dtos::SubscriberResponseDto>,
            // Summaries
            summaries_models::Summary,
            ApiResponse<Vec<summaries_models::Summary>>,
        )
    ),
    tags(
        (name = "reports", description = "Archivable report resources (ration, education, training, procurement, financial assistance)"),
        (name = "donations", description = "Donation records"),
        (name = "payments", description = "Stripe checkout and webhooks"),
        (name = "newsletter", description = "Newsletter signup (public)"),
        (name = "qr", description = "QR rendering (public)"),
        (name = "summaries", description = "Per-category running totals"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Amanah API",
        version = "0.1.0",
        description = "Donation and report back-office API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
