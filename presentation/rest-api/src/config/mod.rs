pub mod app_config;
pub mod cors_config;
pub mod relay_config;
pub mod server_config;
