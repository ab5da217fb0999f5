//! Notifications a [`ModalSheet`](crate::ModalSheet) sends to its observers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sheetpose_core::Subscription;
use sheetpose_foundation::Position;
use smallvec::SmallVec;

/// What the sheet is doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SheetPhase {
    #[default]
    Idle,
    /// A gesture owns the offset.
    Dragging,
    /// Animating towards the committed position.
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetEvent {
    /// The on-screen offset moved, whether by drag or animation frame.
    OffsetChanged(f32),
    PositionCommitted { from: Position, to: Position },
    PhaseChanged(SheetPhase),
}

type Observer = Rc<RefCell<dyn FnMut(&SheetEvent)>>;

#[derive(Default)]
struct ObserverList {
    next_id: u64,
    entries: SmallVec<[(u64, Observer); 2]>,
}

/// Fan-out of sheet events to registered observers.
#[derive(Clone, Default)]
pub(crate) struct EventBus {
    inner: Rc<RefCell<ObserverList>>,
}

impl EventBus {
    pub(crate) fn subscribe(&self, observer: impl FnMut(&SheetEvent) + 'static) -> Subscription {
        let id = {
            let mut list = self.inner.borrow_mut();
            let id = list.next_id;
            list.next_id += 1;
            let observer: Observer = Rc::new(RefCell::new(observer));
            list.entries.push((id, observer));
            id
        };
        let weak: Weak<RefCell<ObserverList>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(list) = weak.upgrade() {
                list.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    pub(crate) fn emit(&self, event: SheetEvent) {
        // Observers may subscribe or unsubscribe while being notified.
        let snapshot: SmallVec<[Observer; 2]> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in snapshot {
            if let Ok(mut observer) = observer.try_borrow_mut() {
                (&mut *observer)(&event);
            } else {
                log::warn!("skipping re-entrant sheet observer for {:?}", event);
            }
        }
    }

    pub(crate) fn observer_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}
