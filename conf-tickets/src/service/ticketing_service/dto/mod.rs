mod ticketing_service_config;

pub use ticketing_service_config::TicketingServiceConfig;
