//! Backend trait definition.

use crate::record::LogRecord;
use crate::severity::Severity;

/// Receiving end of the bridge.
///
/// A backend owns level filtering and record output. The bridge checks
/// [`Backend::is_enabled`] before building a record and moves the record
/// into [`Backend::append`]; it never inspects or buffers records itself.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: one backend instance is shared
/// by every logger handle in a registry.
pub trait Backend: Send + Sync {
    /// Consume one log record.
    ///
    /// Only called for records that passed [`Backend::is_enabled`], so
    /// implementations do not need to re-check the threshold.
    fn append(&self, record: LogRecord);

    /// Whether a record at `severity` would be emitted for `logger`.
    fn is_enabled(&self, logger: &str, severity: Severity) -> bool;
}
