pub mod health_handlers;
pub mod profile_handlers;
pub mod visit_handlers;
