pub mod properties;
pub mod service_config;
