pub mod client;
pub mod http_relay;

pub use client::RelayClient;
pub use http_relay::RelayServiceReqwest;
