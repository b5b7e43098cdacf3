//! Backend gateway
//!
//! All calls to the backend API go through `GatewayClient`, which owns the
//! base URL, the header contract and the response normalization rules. Any
//! failure comes back as a `GatewayError`.

mod client;
pub mod endpoints;
mod errors;
mod types;

pub use client::GatewayClient;
pub use errors::GatewayError;
pub use types::{GatewayResponse, decode_envelope};
