// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler capability for event callbacks

use crate::args::EventArgs;
use crate::error::HandlerError;
use std::sync::Arc;

/// A callback notified when an event fires.
///
/// Handlers receive the dispatcher's owner and the merged argument map
/// (bound arguments overlaid with fire arguments). Returning an error
/// aborts the remainder of that fire pass.
pub trait Handler<O>: Send + Sync {
    fn call(&self, owner: &O, args: &EventArgs) -> Result<(), HandlerError>;
}

/// Shared handle to a registered handler.
///
/// The dispatcher compares handles by pointer identity, so callers must keep
/// a clone of the `Arc` they registered in order to look it up or remove it
/// later.
pub type SharedHandler<O> = Arc<dyn Handler<O>>;

impl<O, F> Handler<O> for F
where
    F: Fn(&O, &EventArgs) -> Result<(), HandlerError> + Send + Sync,
{
    fn call(&self, owner: &O, args: &EventArgs) -> Result<(), HandlerError> {
        (self)(owner, args)
    }
}

/// Wrap a closure or fn as a [`SharedHandler`]
pub fn handler_fn<O, F>(f: F) -> SharedHandler<O>
where
    O: 'static,
    F: Fn(&O, &EventArgs) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
