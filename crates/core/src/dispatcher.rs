// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered handler registry with synchronous firing

use crate::args::EventArgs;
use crate::error::{DispatchAnomaly, HandlerError};
use crate::handler::{Handler, SharedHandler};
use std::sync::{Arc, RwLock};

/// A registered handler together with its bound arguments.
struct HandlerEntry<O> {
    handler: SharedHandler<O>,
    bound: EventArgs,
}

/// An event published by an owning object.
///
/// The dispatcher keeps handlers in registration order and fires them
/// synchronously, in-line on the caller's thread. Every invocation receives
/// the owner plus the handler's bound arguments merged with the fire
/// arguments. Handlers registered through [`add_system_handler`] go to the
/// front of the list so framework reactions run before user code.
///
/// The handler list sits behind a lock that is never held while a handler
/// runs, so handlers may re-enter the registry (add or remove entries,
/// including themselves) during a fire. Such mutations affect only future
/// fires: `fire` iterates a snapshot taken when the pass starts.
///
/// [`add_system_handler`]: EventDispatcher::add_system_handler
pub struct EventDispatcher<O> {
    owner: O,
    handlers: RwLock<Vec<HandlerEntry<O>>>,
}

impl<O> EventDispatcher<O> {
    /// Create a dispatcher publishing on behalf of `owner`.
    ///
    /// The owner is opaque to the dispatcher: it is passed by reference to
    /// every handler invocation and never inspected or mutated.
    pub fn new(owner: O) -> Self {
        Self {
            owner,
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// The object this dispatcher publishes for
    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// Append `handler`, with `bound` arguments replayed to it on every fire.
    ///
    /// Registering a handler that is already attached logs an error but
    /// still appends the duplicate entry; callers that want to prevent
    /// duplicates check [`has_handler`] first.
    ///
    /// [`has_handler`]: EventDispatcher::has_handler
    pub fn add_handler(&self, handler: SharedHandler<O>, bound: EventArgs) -> &Self {
        self.warn_on_duplicate(&handler);
        let mut entries = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        entries.push(HandlerEntry { handler, bound });
        self
    }

    /// Insert `handler` at the front of the list.
    ///
    /// Framework-level reactions use this to run before any user-registered
    /// handler. User code should call [`add_handler`] instead.
    ///
    /// [`add_handler`]: EventDispatcher::add_handler
    pub fn add_system_handler(&self, handler: SharedHandler<O>, bound: EventArgs) -> &Self {
        self.warn_on_duplicate(&handler);
        let mut entries = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(0, HandlerEntry { handler, bound });
        self
    }

    /// Is `handler` already attached to this event?
    pub fn has_handler(&self, handler: &SharedHandler<O>) -> bool {
        let entries = self.handlers.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().any(|e| Arc::ptr_eq(&e.handler, handler))
    }

    /// Remove the first entry registered for `handler`.
    ///
    /// Removing a handler that is not attached logs an error and leaves the
    /// list unchanged; the call itself always succeeds.
    pub fn remove_handler(&self, handler: &SharedHandler<O>) -> &Self {
        let mut entries = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        match entries.iter().position(|e| Arc::ptr_eq(&e.handler, handler)) {
            Some(index) => {
                entries.remove(index);
            }
            None => {
                tracing::error!(
                    anomaly = %DispatchAnomaly::UnknownHandler,
                    handler = ?Arc::as_ptr(handler),
                    registered = entries.len(),
                    "no handler was removed, but will continue"
                );
            }
        }
        self
    }

    /// Fire the event, invoking every handler registered when the pass starts.
    ///
    /// For each entry, `args` is merged over the entry's bound arguments;
    /// fire-time values win on key collision, and any collision is logged as
    /// a contract violation. Each handler is invoked with the owner and the
    /// merged map (empty when neither side supplied arguments).
    ///
    /// The first handler error propagates to the caller untranslated and
    /// skips the rest of the pass. Handlers added during the pass are not
    /// invoked until the next fire; handlers removed during the pass were
    /// already snapshotted and still complete this one.
    pub fn fire(&self, args: EventArgs) -> Result<(), HandlerError> {
        // Snapshot under the read lock, released before any handler runs.
        let snapshot: Vec<HandlerEntry<O>> = {
            let entries = self.handlers.read().unwrap_or_else(|e| e.into_inner());
            entries.iter().map(HandlerEntry::share).collect()
        };
        for entry in &snapshot {
            let conflicts = entry.bound.conflicting_keys(&args);
            if !conflicts.is_empty() {
                let anomaly = DispatchAnomaly::ArgumentKeyConflict { keys: conflicts };
                tracing::error!(
                    anomaly = %anomaly,
                    handler = ?Arc::as_ptr(&entry.handler),
                    "fire arguments overlap bound arguments; fire values win"
                );
            }
            let merged = entry.bound.merged_with(&args);
            entry.handler.call(&self.owner, &merged)?;
        }
        Ok(())
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// True when no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handler_count() == 0
    }

    fn warn_on_duplicate(&self, handler: &SharedHandler<O>) {
        if self.has_handler(handler) {
            tracing::error!(
                anomaly = %DispatchAnomaly::DuplicateHandler,
                handler = ?Arc::as_ptr(handler),
                "handlers should not be added twice"
            );
        }
    }
}

impl<O> HandlerEntry<O> {
    /// Cheap copy for the fire snapshot: bumps the handler refcount and
    /// clones the bound argument map.
    fn share(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            bound: self.bound.clone(),
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
