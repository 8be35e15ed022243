mod qr_handler;

pub use qr_handler::*;
