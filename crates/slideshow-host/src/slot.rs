use std::sync::{Arc, Mutex};

use image::DynamicImage;

/// A decoded slide ready for display, identified by its source location.
#[derive(Debug)]
pub struct SlideNode {
    pub source: String,
    pub image: DynamicImage,
}

impl SlideNode {
    /// Pixel dimensions of the decoded image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// Insertion point the host hands the widget for slot content.
pub trait Surface {
    /// Append a slide to the surface.
    fn attach(&mut self, node: SlideNode);
}

/// Shared handle to a surface, so a render function can carry it until the
/// host invokes it.
pub type SurfaceHandle = Arc<Mutex<dyn Surface + Send>>;

/// Zero-argument completion callback supplied by the host.
pub type SignalFn = Box<dyn FnOnce() + Send>;

/// Two-phase completion token for one slot.
///
/// A render function calls [`begin`](Self::begin) once content is on the
/// surface, then signals [`ActiveSlot::done`] when the slot's time is up.
/// Each signal consumes its value, so begin-before-done ordering and
/// done-exactly-once hold by construction.
pub struct SlotToken {
    begin: SignalFn,
    done: SignalFn,
}

impl SlotToken {
    /// Pair the host's begin/done callbacks into a token.
    pub fn new(begin: SignalFn, done: SignalFn) -> Self {
        Self { begin, done }
    }

    /// Signal that rendering has started.
    pub fn begin(self) -> ActiveSlot {
        (self.begin)();
        ActiveSlot { done: self.done }
    }
}

/// A slot whose rendering has begun.
pub struct ActiveSlot {
    done: SignalFn,
}

impl ActiveSlot {
    /// Signal that the slot is finished and the host should request the
    /// next one.
    pub fn done(self) {
        (self.done)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn begin_then_done_signal_in_order() {
        let (tx, rx) = mpsc::channel();
        let tx_begin = tx.clone();
        let token = SlotToken::new(
            Box::new(move || tx_begin.send("begin").unwrap()),
            Box::new(move || tx.send("done").unwrap()),
        );

        let active = token.begin();
        assert_eq!(rx.try_recv().unwrap(), "begin");

        active.done();
        assert_eq!(rx.try_recv().unwrap(), "done");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn token_can_cross_threads() {
        let (tx, rx) = mpsc::channel();
        let tx_begin = tx.clone();
        let token = SlotToken::new(
            Box::new(move || tx_begin.send("begin").unwrap()),
            Box::new(move || tx.send("done").unwrap()),
        );

        let active = token.begin();
        std::thread::spawn(move || active.done()).join().unwrap();

        assert_eq!(rx.recv().unwrap(), "begin");
        assert_eq!(rx.recv().unwrap(), "done");
    }

    #[test]
    fn slide_node_reports_dimensions() {
        let node = SlideNode {
            source: "images/1.jpeg".into(),
            image: DynamicImage::new_rgb8(4, 2),
        };
        assert_eq!(node.dimensions(), (4, 2));
    }
}
