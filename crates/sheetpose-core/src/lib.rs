//! Core runtime pieces for Sheetpose.
//!
//! Everything here is single-threaded: state cells and frame callbacks are
//! owned by one UI thread and shared through `Rc`.

mod frame_clock;
mod state;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use state::{Binding, MutableState, StateCell, Subscription};

pub mod prelude {
    pub use crate::frame_clock::FrameClock;
    pub use crate::state::{Binding, MutableState, StateCell, Subscription};
}
