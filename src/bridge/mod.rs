//! The legacy facade: logger handles and their registry.
//!
//! # Data Flow
//!
//! ```text
//! caller
//!     → BridgeRegistry::logger(name)   (cached handle, first-request-wins)
//!     → Logger::log / log_* macro      (level mapping, caller attribution)
//!     → Backend::is_enabled            (threshold check, mapped severity)
//!     → Backend::append                (record handed off, bridge is done)
//! ```
//!
//! Hierarchy and level mutation are not part of the flow: `parent`,
//! `set_parent`, and `set_level` exist on the surface for compatibility
//! and always fail with [`crate::BridgeError::Unsupported`].

mod logger;
mod registry;

pub use logger::Logger;
pub use registry::{BridgeRegistry, GLOBAL_LOGGER_NAME};
