//! Driving a search to completion with cancellation.

use mazewalk_core::{Context, Maze, Point};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::event::Sink;
use crate::search::{Outcome, Search, Step};
use crate::strategy::{Engine, Strategy};
use crate::traits::AstarPather;

/// Runs one search, checking a [`Context`] before every step.
pub struct Runner<'a, P> {
    strategy: Strategy,
    engine: Engine<'a, P>,
    ctx: Context,
}

impl<'a, P: AstarPather> Runner<'a, P> {
    /// Prepare a run of `strategy` from `from` to `to`.
    pub fn new(
        strategy: Strategy,
        pather: &'a P,
        from: Point,
        to: Point,
        config: &SearchConfig,
        ctx: Context,
    ) -> Self {
        log::debug!("{strategy}: search {from} -> {to}");
        Self {
            strategy,
            engine: strategy.engine(pather, from, to, config),
            ctx,
        }
    }

    /// The strategy being run.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Rounds performed so far.
    pub fn steps(&self) -> usize {
        self.engine.steps()
    }

    fn check(&self) -> Result<(), SearchError> {
        if self.ctx.is_done() {
            log::info!("{}: cancelled after {} steps", self.strategy, self.engine.steps());
            return Err(SearchError::Cancelled);
        }
        Ok(())
    }

    /// Advance by one round, unless the context has been cancelled.
    ///
    /// The context is checked again once the goal is reached, so a run
    /// cancelled by the sink during its last round never reports a path.
    /// The returned step is never [`Step::Reached`].
    pub fn step(&mut self, sink: &mut dyn Sink) -> Result<Step, SearchError> {
        self.check()?;
        let step = match self.engine.step(sink) {
            Step::Reached => {
                self.check()?;
                Step::Done(self.engine.complete(sink).unwrap_or(Outcome::NotFound))
            }
            step => step,
        };
        log::trace!("{}: step {}", self.strategy, self.engine.steps());
        Ok(step)
    }

    /// Step until the search is done or cancelled. The runner is consumed:
    /// a cancelled run is abandoned with all of its state.
    pub fn run(mut self, sink: &mut dyn Sink) -> Result<Outcome, SearchError> {
        loop {
            if let Step::Done(outcome) = self.step(sink)? {
                match outcome.path() {
                    Some(path) => log::debug!(
                        "{}: found path of {} cells in {} steps",
                        self.strategy,
                        path.len(),
                        self.engine.steps()
                    ),
                    None => log::debug!("{}: no path after {} steps", self.strategy, self.engine.steps()),
                }
                return Ok(outcome);
            }
        }
    }
}

/// Run `strategy` on `maze` from its start to its goal with the default
/// configuration, reporting to `sink`.
pub fn run_search(strategy: Strategy, maze: &Maze, sink: &mut dyn Sink) -> Outcome {
    log::debug!("{strategy}: search {} -> {}", maze.start(), maze.goal());
    let mut engine = strategy.engine(maze, maze.start(), maze.goal(), &SearchConfig::default());
    let outcome = engine.run(sink);
    log::debug!("{strategy}: found={} in {} steps", outcome.is_found(), engine.steps());
    outcome
}

/// Run `strategy` on `maze` with an explicit configuration and
/// cancellation context.
pub fn run_search_with(
    strategy: Strategy,
    maze: &Maze,
    config: &SearchConfig,
    sink: &mut dyn Sink,
    ctx: &Context,
) -> Result<Outcome, SearchError> {
    Runner::new(strategy, maze, maze.start(), maze.goal(), config, ctx.clone()).run(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Trace;

    struct CancelOnVisit {
        ctx: Context,
        visits: usize,
    }

    impl Sink for CancelOnVisit {
        fn on_visited(&mut self, _p: Point) {
            self.visits += 1;
            self.ctx.cancel();
        }
        fn on_enqueued(&mut self, _p: Point) {}
        fn on_path_step(&mut self, _p: Point, _best: bool, _reverse: bool) {
            panic!("a cancelled run must not reconstruct a path");
        }
    }

    #[test]
    fn run_search_finds_goal() {
        let m = Maze::parse("S..\n...\n..G").unwrap();
        for s in Strategy::ALL {
            let outcome = run_search(s, &m, &mut Trace::new());
            assert!(outcome.is_found(), "{s}");
        }
    }

    #[test]
    fn cancelled_before_start() {
        let m = Maze::parse("S..\n...\n..G").unwrap();
        let ctx = Context::new();
        ctx.cancel();
        let mut trace = Trace::new();
        let res = run_search_with(Strategy::Bfs, &m, &SearchConfig::default(), &mut trace, &ctx);
        assert_eq!(res, Err(SearchError::Cancelled));
        assert!(trace.is_empty());
    }

    #[test]
    fn cancelled_mid_run() {
        let m = Maze::parse("S....\n.....\n.....\n....G").unwrap();
        for s in Strategy::ALL {
            let ctx = Context::new();
            let mut sink = CancelOnVisit {
                ctx: ctx.clone(),
                visits: 0,
            };
            let res = run_search_with(s, &m, &SearchConfig::default(), &mut sink, &ctx);
            assert_eq!(res, Err(SearchError::Cancelled), "{s}");
            assert!(sink.visits > 0);
        }
    }

    #[test]
    fn cancelled_in_the_round_that_reaches_the_goal() {
        let m = Maze::parse("SG").unwrap();
        for s in Strategy::ALL {
            let ctx = Context::new();
            let mut sink = CancelOnVisit {
                ctx: ctx.clone(),
                visits: 0,
            };
            let res = run_search_with(s, &m, &SearchConfig::default(), &mut sink, &ctx);
            assert_eq!(res, Err(SearchError::Cancelled), "{s}");
            assert_eq!(sink.visits, 1, "{s}");
        }
    }

    #[test]
    fn reached_search_completes_once() {
        let m = Maze::parse("SG").unwrap();
        let mut engine = Strategy::Bfs.engine(&m, m.start(), m.goal(), &SearchConfig::default());
        let mut trace = Trace::new();
        assert_eq!(engine.complete(&mut trace), None);
        assert_eq!(engine.step(&mut trace), Step::Reached);
        assert_eq!(engine.step(&mut trace), Step::Reached);
        assert_eq!(trace.path_steps().count(), 0);
        let outcome = engine.complete(&mut trace);
        assert!(outcome.as_ref().is_some_and(Outcome::is_found));
        assert_eq!(trace.path_steps().count(), 2);
        assert_eq!(engine.step(&mut trace), Step::Done(outcome.clone().unwrap()));
        assert_eq!(engine.complete(&mut trace), outcome);
        assert_eq!(trace.path_steps().count(), 2);
    }

    #[test]
    fn runner_steps_manually() {
        let m = Maze::parse("S.G").unwrap();
        let mut runner = Runner::new(
            Strategy::Bfs,
            &m,
            m.start(),
            m.goal(),
            &SearchConfig::default(),
            Context::new(),
        );
        assert_eq!(runner.strategy(), Strategy::Bfs);
        let mut trace = Trace::new();
        assert_eq!(runner.step(&mut trace), Ok(Step::Pending));
        assert!(matches!(runner.step(&mut trace), Ok(Step::Done(Outcome::Found(_)))));
        assert_eq!(runner.steps(), 2);
    }
}
