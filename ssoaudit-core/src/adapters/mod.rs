//! Adapter implementations
//!
//! Concrete implementations of the port traits. The only external
//! dependency of this tool is the pair of AWS endpoints, reached through
//! a SigV4-signing blocking HTTP client.

mod sigv4;

pub use sigv4::SigV4Caller;
