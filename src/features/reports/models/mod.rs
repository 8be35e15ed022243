mod assistance;
mod education;
mod procurement;
mod ration;
mod training;

pub use assistance::FinancialAssistanceReport;
pub use education::EducationReport;
pub use procurement::ProcurementReport;
pub use ration::RationReport;
pub use training::TrainingReport;
