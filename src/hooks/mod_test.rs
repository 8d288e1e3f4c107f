use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Calls {
    mounts: usize,
    updates: usize,
    destroys: usize,
}

struct StubHook {
    calls: Rc<RefCell<Calls>>,
    fail_mount: bool,
}

impl StubHook {
    fn new(calls: &Rc<RefCell<Calls>>) -> Box<dyn Hook> {
        Box::new(Self { calls: Rc::clone(calls), fail_mount: false })
    }

    fn failing(calls: &Rc<RefCell<Calls>>) -> Box<dyn Hook> {
        Box::new(Self { calls: Rc::clone(calls), fail_mount: true })
    }
}

impl Hook for StubHook {
    fn on_mount(&mut self) -> Result<(), HookError> {
        self.calls.borrow_mut().mounts += 1;
        if self.fail_mount {
            return Err(HookError::InvalidProp { name: "value".to_owned(), element: "DIV#x".to_owned() });
        }
        Ok(())
    }

    fn on_update(&mut self) -> Result<(), HookError> {
        self.calls.borrow_mut().updates += 1;
        Ok(())
    }

    fn on_destroy(&mut self) {
        self.calls.borrow_mut().destroys += 1;
    }
}

// =============================================================
// HookRegistry
// =============================================================

#[test]
fn registry_mounts_and_retains_hooks() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut registry = HookRegistry::new();
    registry.mount("battle-hp", StubHook::new(&calls)).expect("mount should succeed");
    assert_eq!(registry.len(), 1);
    assert_eq!(calls.borrow().mounts, 1);
}

#[test]
fn registry_update_dispatches_by_element_id() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut registry = HookRegistry::new();
    registry.mount("battle-hp", StubHook::new(&calls)).expect("mount should succeed");

    assert!(registry.update("battle-hp").expect("update should succeed"));
    assert!(!registry.update("missing").expect("unknown id is not an error"));
    assert_eq!(calls.borrow().updates, 1);
}

#[test]
fn registry_does_not_retain_hooks_that_fail_to_mount() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut registry = HookRegistry::new();
    let err = registry
        .mount("battle-hp", StubHook::failing(&calls))
        .expect_err("mount failure should propagate");
    assert!(matches!(err, HookError::InvalidProp { .. }));
    assert!(registry.is_empty());
}

#[test]
fn registry_remount_destroys_the_previous_instance() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut registry = HookRegistry::new();
    registry.mount("battle-hp", StubHook::new(&calls)).expect("first mount");
    registry.mount("battle-hp", StubHook::new(&calls)).expect("second mount");
    assert_eq!(registry.len(), 1);
    assert_eq!(calls.borrow().destroys, 1);
    assert_eq!(calls.borrow().mounts, 2);
}

#[test]
fn registry_destroy_runs_the_destroy_callback() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut registry = HookRegistry::new();
    registry.mount("turn-timer", StubHook::new(&calls)).expect("mount");
    assert!(registry.destroy("turn-timer"));
    assert!(!registry.destroy("turn-timer"));
    assert_eq!(calls.borrow().destroys, 1);
    assert!(registry.is_empty());
}

#[test]
fn registry_destroy_all_tears_down_every_hook() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut registry = HookRegistry::new();
    registry.mount("battle-hp", StubHook::new(&calls)).expect("mount");
    registry.mount("turn-timer", StubHook::new(&calls)).expect("mount");
    registry.destroy_all();
    assert_eq!(calls.borrow().destroys, 2);
    assert!(registry.is_empty());
}
