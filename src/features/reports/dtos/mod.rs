mod assistance_dto;
mod education_dto;
mod procurement_dto;
mod ration_dto;
mod training_dto;

pub use assistance_dto::{CreateFinancialAssistanceReportDto, UpdateFinancialAssistanceReportDto};
pub use education_dto::{CreateEducationReportDto, UpdateEducationReportDto};
pub use procurement_dto::{CreateProcurementReportDto, UpdateProcurementReportDto};
pub use ration_dto::{CreateRationReportDto, UpdateRationReportDto};
pub use training_dto::{CreateTrainingReportDto, UpdateTrainingReportDto};
