//! Reentrancy specs
//!
//! Handlers may mutate the registry mid-fire; the running pass iterates the
//! snapshot taken when it started.

use crate::prelude::*;
use crate::prelude::assert_eq;
use std::sync::{Arc, Mutex};

#[test]
fn handler_that_removes_itself_finishes_the_current_pass() {
    let rec = Recorder::new();
    let event = Arc::new(event());

    // The handler needs its own registered handle to unregister, so it is
    // parked in a slot filled after construction.
    let slot: Arc<Mutex<Option<SharedHandler<String>>>> = Arc::new(Mutex::new(None));
    let one_shot = {
        let event = Arc::clone(&event);
        let slot = Arc::clone(&slot);
        let inner = rec.handler("one-shot");
        handler_fn(move |owner: &String, args: &EventArgs| {
            inner.call(owner, args)?;
            if let Some(me) = slot.lock().unwrap().as_ref() {
                event.remove_handler(me);
            }
            Ok(())
        })
    };
    *slot.lock().unwrap() = Some(one_shot.clone());

    event.add_handler(one_shot, EventArgs::new());
    event.add_handler(rec.handler("steady"), EventArgs::new());

    event.fire(EventArgs::new()).unwrap();
    assert_eq!(rec.calls(), vec!["one-shot(O)", "steady(O)"]);
    assert_eq!(event.handler_count(), 1);

    event.fire(EventArgs::new()).unwrap();
    assert_eq!(rec.calls(), vec!["one-shot(O)", "steady(O)", "steady(O)"]);
}

#[test]
fn handler_removed_by_a_peer_mid_pass_still_runs_this_pass() {
    let rec = Recorder::new();
    let event = Arc::new(event());

    let victim = rec.handler("victim");
    let remover = {
        let event = Arc::clone(&event);
        let victim = victim.clone();
        let inner = rec.handler("remover");
        handler_fn(move |owner: &String, args: &EventArgs| {
            inner.call(owner, args)?;
            event.remove_handler(&victim);
            Ok(())
        })
    };

    event.add_handler(remover, EventArgs::new());
    event.add_handler(victim.clone(), EventArgs::new());

    event.fire(EventArgs::new()).unwrap();
    // The victim was snapshotted before removal, so it still ran
    assert_eq!(rec.calls(), vec!["remover(O)", "victim(O)"]);

    event.fire(EventArgs::new()).unwrap();
    assert_eq!(rec.calls(), vec!["remover(O)", "victim(O)", "remover(O)"]);
}

#[test]
fn handler_added_mid_pass_runs_from_the_next_fire() {
    let rec = Recorder::new();
    let event = Arc::new(event());

    let late = rec.handler("late");
    let adder = {
        let event = Arc::clone(&event);
        let late = late.clone();
        let inner = rec.handler("adder");
        handler_fn(move |owner: &String, args: &EventArgs| {
            inner.call(owner, args)?;
            if !event.has_handler(&late) {
                event.add_handler(late.clone(), EventArgs::new());
            }
            Ok(())
        })
    };

    event.add_handler(adder, EventArgs::new());

    event.fire(EventArgs::new()).unwrap();
    assert_eq!(rec.calls(), vec!["adder(O)"]);

    event.fire(EventArgs::new()).unwrap();
    assert_eq!(rec.calls(), vec!["adder(O)", "adder(O)", "late(O)"]);
}
