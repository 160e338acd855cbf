//! Canonical schema constants for structured logging and events
//!
//! These constants keep log fields consistent between the manager, the
//! CLI and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Catalogue context
pub const FIELD_PATH: &str = "path";
pub const FIELD_FORMAT: &str = "format";
pub const FIELD_BOOK_COUNT: &str = "book_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
