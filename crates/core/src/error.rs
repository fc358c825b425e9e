// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error and diagnostic types for event dispatch

use thiserror::Error;

/// Boxed error surfaced by a handler callback.
///
/// The dispatcher never translates these: the first handler error is
/// returned to the `fire` caller as-is.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Anomalies the dispatcher detects, logs at error level, and swallows.
///
/// None of these interrupt the caller: a duplicate registration still
/// registers, an unknown removal is a no-op, and a key conflict still fires
/// with the fire-time value winning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchAnomaly {
    /// The same handler was registered more than once
    #[error("handler is already registered for this event")]
    DuplicateHandler,

    /// Removal was requested for a handler that is not registered
    #[error("handler is not handling this event, so cannot unhandle it")]
    UnknownHandler,

    /// Fire-time argument names collide with a handler's bound arguments
    #[error("fire arguments collide with bound arguments: {}", keys.join(", "))]
    ArgumentKeyConflict { keys: Vec<String> },
}
