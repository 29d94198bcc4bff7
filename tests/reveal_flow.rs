// End-to-end state flow for the services section, driven the way the
// view drives it: intersection reports reveal cards, pointer events
// move the hover, teardown disconnects the watcher.

use std::cell::Cell;
use std::rc::Rc;

use auric_landing::catalog::CATALOG;
use auric_landing::observe::{Subscription, Watcher};
use auric_landing::state::{Hover, RevealSet};

struct RecordingWatcher {
    disconnects: Rc<Cell<u32>>,
}

impl Watcher for RecordingWatcher {
    fn disconnect(&mut self) {
        self.disconnects.set(self.disconnects.get() + 1);
    }
}

#[test]
fn test_reveal_all_then_hover_one_then_clear() {
    let mut revealed = RevealSet::default();
    let mut hover = Hover::default();

    // Every card starts pending and collapsed.
    for entry in &CATALOG {
        assert!(!revealed.contains(entry.id));
        assert!(!hover.is(entry.id));
    }

    // Intersection order is whatever the viewport produces.
    for id in [4, 1, 6, 3, 5, 2] {
        revealed.reveal(id);
    }
    for entry in &CATALOG {
        assert!(revealed.contains(entry.id));
    }
    assert_eq!(revealed.len(), CATALOG.len());

    // Exactly one card expands while hovered.
    hover.enter(4);
    for entry in &CATALOG {
        assert_eq!(hover.is(entry.id), entry.id == 4);
    }

    // Pointer leave collapses everything; reveal state survives.
    hover.leave();
    for entry in &CATALOG {
        assert!(!hover.is(entry.id));
        assert!(revealed.contains(entry.id));
    }
}

#[test]
fn test_unmount_leaves_no_active_subscription() {
    let disconnects = Rc::new(Cell::new(0));
    let sub = Subscription::new(Box::new(RecordingWatcher {
        disconnects: disconnects.clone(),
    }));
    assert!(sub.is_active());

    // Unmount drops the handle.
    drop(sub);
    assert_eq!(disconnects.get(), 1);
}
