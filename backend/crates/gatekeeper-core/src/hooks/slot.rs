use super::{same_hook, StandardUtility, UtilityCall, UtilityHookRef};
use crate::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// The host's single utility-hook slot.
///
/// Reads clone the `Arc` and release the lock before calling into the hook,
/// so a hook may itself install or remove hooks while it runs.
#[derive(Default)]
pub struct HookSlot {
    head: RwLock<Option<UtilityHookRef>>,
}

impl HookSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with a hook, as if another module loaded first.
    pub fn with_hook(hook: UtilityHookRef) -> Self {
        Self {
            head: RwLock::new(Some(hook)),
        }
    }

    pub fn current(&self) -> Option<UtilityHookRef> {
        self.head.read().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.head.read().is_none()
    }

    /// Whether `hook` is the head of the chain.
    pub fn is_head(&self, hook: &UtilityHookRef) -> bool {
        self.head
            .read()
            .as_ref()
            .is_some_and(|head| same_hook(head, hook))
    }

    /// Overwrite the slot, returning what it held.
    pub fn replace(&self, hook: Option<UtilityHookRef>) -> Option<UtilityHookRef> {
        std::mem::replace(&mut *self.head.write(), hook)
    }

    /// Install a hook built from the current head in one step.
    ///
    /// `build` receives the displaced hook (so the new one can forward to it)
    /// and the slot stays write-locked until the new head is in place.
    /// Returns the new head and the displaced hook.
    pub fn chain<F>(&self, build: F) -> (UtilityHookRef, Option<UtilityHookRef>)
    where
        F: FnOnce(Option<UtilityHookRef>) -> UtilityHookRef,
    {
        let mut head = self.head.write();
        let previous = head.take();
        let installed = build(previous.clone());
        *head = Some(Arc::clone(&installed));
        (installed, previous)
    }

    /// Put `previous` back at the head of the slot.
    ///
    /// Returns `false` when `expected` was no longer the head, i.e. someone
    /// chained on top of it or replaced it in the meantime.
    pub fn restore(&self, expected: &UtilityHookRef, previous: Option<UtilityHookRef>) -> bool {
        let mut head = self.head.write();
        let was_head = head.as_ref().is_some_and(|current| same_hook(current, expected));
        *head = previous;
        was_head
    }

    /// Run a statement through the chain.
    pub fn dispatch(&self, call: &UtilityCall<'_>, standard: &dyn StandardUtility) -> Result<()> {
        match self.current() {
            Some(hook) => {
                log::trace!(
                    target: "gatekeeper::hook",
                    "Dispatching {} to {}",
                    call.statement.name(),
                    hook.name()
                );
                hook.process_utility(call, standard)
            }
            None => standard.execute(call),
        }
    }
}
