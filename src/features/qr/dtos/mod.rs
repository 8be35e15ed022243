mod qr_dto;

pub use qr_dto::QrQuery;
