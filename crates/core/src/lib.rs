// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! fanout-core: In-process event dispatch for decoupling publishers from listeners
//!
//! This crate provides:
//! - `EventDispatcher` - an ordered handler registry fired synchronously by its owner
//! - `Handler` / `handler_fn` - the callback capability and its closure adapter
//! - `EventArgs` - named argument maps merged with fire-over-bound precedence
//!
//! No message bus, no persistence, no async: this is an in-memory decoupling
//! device between an owning object and its collaborators in the same process.

pub mod args;
pub mod dispatcher;
pub mod error;
pub mod handler;

// Re-exports
pub use args::EventArgs;
pub use dispatcher::EventDispatcher;
pub use error::{DispatchAnomaly, HandlerError};
pub use handler::{handler_fn, Handler, SharedHandler};
