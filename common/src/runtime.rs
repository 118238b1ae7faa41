use std::{cell::RefCell, rc::Rc, time::Duration};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::state::{ToastTicket, ViewState};

// StateHandle
//
// access to the view state from async code.  the view state is owned by whatever drives
// the ui (a dioxus signal in the webapp), and the async flows below only ever touch it
// inside short closures so that nothing is borrowed across an await
pub trait StateHandle: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R;

    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;
}

impl StateHandle for Rc<RefCell<ViewState>> {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }
}

// Timer
//
// the only thing the core needs from an executor.  the browser has no tokio, so the
// webapp supplies gloo timers and the tests supply tokio's pausable clock
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

// auto-dismiss for a toast
//
// meant to be spawned right after the toast is shown.  if the toast was replaced or
// dismissed in the meantime the ticket is stale and this does nothing
#[instrument(level = "debug", skip(handle, timer))]
pub async fn expire_toast_after<H: StateHandle, T: Timer>(
    handle: H,
    timer: T,
    ticket: ToastTicket,
    duration: Duration,
) {
    timer.sleep(duration).await;

    if handle.update(|state| state.expire_toast(ticket)) {
        debug!("toast expired");
    }
}
