use serde::{Deserialize, Serialize};

use crate::slot::SlotToken;

/// Metadata attached to an accepted offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferMeta {
    /// Identifier the host shows for this slot (the slide's source
    /// location).
    pub label: String,
    /// How long the host may keep reusing the render function, in
    /// milliseconds.
    pub ttl_ms: u64,
}

/// The function a provider hands the host to draw one slot.
pub type RenderFn = Box<dyn FnOnce(SlotToken) + Send>;

/// Callback the host supplies to receive a slot answer: the render payload
/// on success, `None` to skip the slot.
pub type OfferSink = Box<dyn FnOnce(Option<(RenderFn, OfferMeta)>) + Send>;

/// Single-use handle for answering one `prepare` call.
///
/// Exactly one of [`accept`](Self::accept) or [`decline`](Self::decline)
/// is called per slot; consuming `self` makes a second answer
/// unrepresentable.
pub struct Offer {
    sink: OfferSink,
}

impl Offer {
    /// Wrap the host's offer callback.
    pub fn new(sink: OfferSink) -> Self {
        Self { sink }
    }

    /// Fill the slot with a render function and its metadata.
    pub fn accept(self, render: RenderFn, meta: OfferMeta) {
        (self.sink)(Some((render, meta)));
    }

    /// Skip this slot.
    pub fn decline(self) {
        (self.sink)(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn capture() -> (Offer, mpsc::Receiver<Option<OfferMeta>>) {
        let (tx, rx) = mpsc::channel();
        let offer = Offer::new(Box::new(move |answer| {
            tx.send(answer.map(|(_, meta)| meta)).unwrap();
        }));
        (offer, rx)
    }

    #[test]
    fn accept_delivers_render_and_meta() {
        let (offer, rx) = capture();
        offer.accept(
            Box::new(|_| {}),
            OfferMeta {
                label: "images/1.jpeg".into(),
                ttl_ms: 3_600_000,
            },
        );

        let meta = rx.recv().unwrap().unwrap();
        assert_eq!(meta.label, "images/1.jpeg");
        assert_eq!(meta.ttl_ms, 3_600_000);
    }

    #[test]
    fn decline_delivers_nothing() {
        let (offer, rx) = capture();
        offer.decline();
        assert!(rx.recv().unwrap().is_none());
    }

    #[test]
    fn meta_round_trips_through_json() {
        let meta = OfferMeta {
            label: "images/2.jpeg".into(),
            ttl_ms: 1000,
        };
        let raw = serde_json::to_string(&meta).unwrap();
        let back: OfferMeta = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, meta);
    }
}
