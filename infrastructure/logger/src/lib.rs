pub mod cart_event_logger;
pub mod tracing_logger;

pub use cart_event_logger::CartEventLogger;
pub use tracing_logger::TracingLogger;
