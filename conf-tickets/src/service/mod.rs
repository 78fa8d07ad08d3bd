pub mod blob_storage_service;
pub mod mail_service;
pub mod qr_code_service;
pub mod signature_service;
pub mod ticketing_service;
