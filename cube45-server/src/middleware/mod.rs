pub mod logging;
pub mod rate_limit;

pub use logging::logging_middleware;
pub use rate_limit::reservation_rate_limit;
