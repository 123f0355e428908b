//! Operations that span more than one statement.
//!
//! Services own a pooled connection and open a transaction for each operation, running the
//! entity repositories against it so a read-then-write is atomic.

pub mod event;
pub mod report;
