mod dto;
mod ticket_mail;
pub mod ticket_token;
mod ticketing_service;
mod ticketing_service_impl;
#[cfg(test)]
mod ticketing_service_impl_scenarios;

pub use dto::TicketingServiceConfig;
pub use ticketing_service::*;
pub use ticketing_service_impl::*;
