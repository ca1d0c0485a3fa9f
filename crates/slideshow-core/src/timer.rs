use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Run `f` once after `delay` on a detached thread.
///
/// Fire-once and non-cancelable. The handle is returned so callers that
/// need to observe completion can join it; production callers drop it.
pub fn fire_after(delay: Duration, f: impl FnOnce() + Send + 'static) -> JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(delay);
        f();
    })
}
