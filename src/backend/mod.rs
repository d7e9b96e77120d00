//! Backend seam for the bridge.
//!
//! The facade never talks to a logging framework directly; it hands
//! records to a [`Backend`] trait object. This keeps the bridge decoupled
//! from the production framework and lets tests capture output instead of
//! emitting it.
//!
//! # Architecture
//!
//! - [`Backend`] trait: append path and enablement check
//! - [`TracingBackend`]: production backend emitting `tracing` events
//! - [`MemoryBackend`]: capturing backend for tests and embedders
//! - [`NoOpBackend`]: silent backend
//!
//! # Usage
//!
//! Construct a backend, wrap it in an `Arc`, and hand it to
//! [`crate::BridgeRegistry::new`]:
//!
//! ```
//! use logbridge::{BridgeRegistry, LevelConfig, TracingBackend};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(TracingBackend::new(LevelConfig::default()));
//! let registry = BridgeRegistry::new(backend);
//! registry.logger("app").info("routed into tracing");
//! ```

mod memory;
mod noop;
mod tracing_backend;
mod r#trait;

pub use memory::MemoryBackend;
pub use noop::NoOpBackend;
pub use r#trait::Backend;
pub use tracing_backend::TracingBackend;
