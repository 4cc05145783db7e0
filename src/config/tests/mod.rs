//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence and default tests
//! - `field_resolution`: Token and owner resolution tests
//! - `validation`: Bind address, base URL and timeout validation tests

mod helpers;
