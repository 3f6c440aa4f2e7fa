//! Search notifications: the [`Sink`] trait, [`SearchEvent`] values and the
//! recording [`Trace`] sink.
//!
//! Engines report every cell they touch to a sink, synchronously and in
//! processing order. Pacing and rendering are the sink's business; the
//! recommended way to animate a search is to record a [`Trace`] and
//! [`replay`](Trace::replay) it into a slow sink afterwards.

use mazewalk_core::{Context, Point};

use crate::error::SearchError;

/// Receiver of search notifications.
pub trait Sink {
    /// A cell was marked visited (expanded or closed).
    fn on_visited(&mut self, p: Point);

    /// A cell was added to the frontier.
    fn on_enqueued(&mut self, p: Point);

    /// A cell of the reconstructed path. `best` is set for the final route
    /// of a successful search; `reverse` marks the backward half of a joined
    /// bidirectional path.
    fn on_path_step(&mut self, p: Point, best: bool, reverse: bool);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn on_visited(&mut self, p: Point) {
        (**self).on_visited(p);
    }

    fn on_enqueued(&mut self, p: Point) {
        (**self).on_enqueued(p);
    }

    fn on_path_step(&mut self, p: Point, best: bool, reverse: bool) {
        (**self).on_path_step(p, best, reverse);
    }
}

/// A sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn on_visited(&mut self, _p: Point) {}
    fn on_enqueued(&mut self, _p: Point) {}
    fn on_path_step(&mut self, _p: Point, _best: bool, _reverse: bool) {}
}

/// One recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SearchEvent {
    Visited { pos: Point },
    Enqueued { pos: Point },
    PathStep { pos: Point, best: bool, reverse: bool },
}

impl SearchEvent {
    /// The cell the event is about.
    pub fn pos(self) -> Point {
        match self {
            Self::Visited { pos } | Self::Enqueued { pos } | Self::PathStep { pos, .. } => pos,
        }
    }

    /// Forward the event to a sink.
    pub fn deliver(self, sink: &mut dyn Sink) {
        match self {
            Self::Visited { pos } => sink.on_visited(pos),
            Self::Enqueued { pos } => sink.on_enqueued(pos),
            Self::PathStep { pos, best, reverse } => sink.on_path_step(pos, best, reverse),
        }
    }
}

/// A sink that records every event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    events: Vec<SearchEvent>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Cells reported visited, in order.
    pub fn visited(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::Visited { pos } => Some(pos),
            _ => None,
        })
    }

    /// Cells reported enqueued, in order.
    pub fn enqueued(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::Enqueued { pos } => Some(pos),
            _ => None,
        })
    }

    /// Path steps, in order.
    pub fn path_steps(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::PathStep { pos, .. } => Some(pos),
            _ => None,
        })
    }

    /// Deliver every recorded event to `sink`, in order.
    ///
    /// `ctx` is checked before each event; on cancellation the replay stops
    /// and returns [`SearchError::Cancelled`].
    pub fn replay(&self, sink: &mut dyn Sink, ctx: &Context) -> Result<(), SearchError> {
        for &event in &self.events {
            if ctx.is_done() {
                log::info!("trace replay cancelled");
                return Err(SearchError::Cancelled);
            }
            event.deliver(sink);
        }
        Ok(())
    }
}

impl Sink for Trace {
    fn on_visited(&mut self, pos: Point) {
        self.events.push(SearchEvent::Visited { pos });
    }

    fn on_enqueued(&mut self, pos: Point) {
        self.events.push(SearchEvent::Enqueued { pos });
    }

    fn on_path_step(&mut self, pos: Point, best: bool, reverse: bool) {
        self.events.push(SearchEvent::PathStep { pos, best, reverse });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cancels its context after a fixed number of events.
    struct CancelAfter {
        ctx: Context,
        left: usize,
        seen: Vec<Point>,
    }

    impl Sink for CancelAfter {
        fn on_visited(&mut self, p: Point) {
            self.seen.push(p);
            self.left -= 1;
            if self.left == 0 {
                self.ctx.cancel();
            }
        }
        fn on_enqueued(&mut self, p: Point) {
            self.on_visited(p);
        }
        fn on_path_step(&mut self, p: Point, _best: bool, _reverse: bool) {
            self.on_visited(p);
        }
    }

    fn sample() -> Trace {
        let mut t = Trace::new();
        t.on_enqueued(Point::new(0, 1));
        t.on_visited(Point::new(0, 0));
        t.on_visited(Point::new(0, 1));
        t.on_path_step(Point::new(0, 0), true, false);
        t.on_path_step(Point::new(0, 1), true, true);
        t
    }

    #[test]
    fn records_in_order() {
        let t = sample();
        assert_eq!(t.len(), 5);
        assert_eq!(t.events()[0], SearchEvent::Enqueued { pos: Point::new(0, 1) });
        assert_eq!(t.visited().collect::<Vec<_>>(), vec![Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(t.enqueued().count(), 1);
        assert_eq!(t.path_steps().collect::<Vec<_>>(), vec![Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(
            t.events()[4],
            SearchEvent::PathStep {
                pos: Point::new(0, 1),
                best: true,
                reverse: true,
            }
        );
    }

    #[test]
    fn replay_reproduces_the_trace() {
        let t = sample();
        let mut copy = Trace::new();
        t.replay(&mut copy, &Context::new()).unwrap();
        assert_eq!(copy, t);
    }

    #[test]
    fn replay_stops_on_cancel() {
        let t = sample();
        let ctx = Context::new();
        let mut sink = CancelAfter {
            ctx: ctx.clone(),
            left: 2,
            seen: Vec::new(),
        };
        assert_eq!(t.replay(&mut sink, &ctx), Err(SearchError::Cancelled));
        assert_eq!(sink.seen.len(), 2);
    }

    #[test]
    fn mut_ref_is_a_sink() {
        let mut t = Trace::new();
        {
            let mut r = &mut t;
            Sink::on_visited(&mut r, Point::new(3, 3));
        }
        NullSink.on_visited(Point::new(1, 1));
        assert_eq!(t.visited().next(), Some(Point::new(3, 3)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_json_shape() {
        let e = SearchEvent::Visited { pos: Point::new(1, 2) };
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"kind":"visited","pos":{"row":1,"col":2}}"#);
        let back: SearchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
