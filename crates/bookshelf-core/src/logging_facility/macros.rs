//! Operation boundary macros
//!
//! Every catalogue operation that touches the filesystem is bracketed by a
//! `start` event and exactly one of `end` or `end_error`. Extra fields are
//! passed through to `tracing` unchanged.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use bookshelf_core::log_op_start;
/// log_op_start!("catalogue_open");
/// log_op_start!("catalogue_open", path = "books.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = bookshelf_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use bookshelf_core::log_op_end;
/// log_op_end!("catalogue_save", duration_ms = 3);
/// log_op_end!("catalogue_open", duration_ms = 3, book_count = 5);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = bookshelf_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// `$err` is an `ExError`, borrowed; its kind, code and rendered message
/// become `err.*` fields.
///
/// # Example
///
/// ```
/// # use bookshelf_core::{log_op_error, errors::{ExError, ExErrorKind}};
/// let err = ExError::new(ExErrorKind::NotFound);
/// log_op_error!("catalogue_open", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: &$crate::errors::ExError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = bookshelf_core_types::schema::EVENT_END_ERROR,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.message = %ex_err,
            duration_ms = $duration
            $(, $($field)*)?
        );
    }};
}
