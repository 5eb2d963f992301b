//! Global configuration constants for the product catalogue.
//!
//! Input validation limits and server defaults are defined here.
//! These are compile-time constants; runtime configuration is handled via CLI arguments
//! in `main.rs`.

/// Maximum length of a product name in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a product type description in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum length of a product type identifier in characters.
pub const MAX_PRODUCT_TYPE_ID_LEN: usize = 64;

/// Maximum length of a single search filter value in characters.
pub const MAX_FILTER_LEN: usize = 200;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Global rate limit in requests per second.
pub const RATE_LIMIT_RPS: u64 = 100;

/// Maximum HTTP request body size in bytes (1 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;
