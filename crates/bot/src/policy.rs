//! Per-tick decision policy.
//!
//! # Tick pipeline
//!
//! 1. Build the cell graph on the first tick and keep it for the level
//! 2. Estimate every pursuer one tick ahead ([`MotionEstimator`])
//! 3. Score every cell ([`score_cells`]) and keep the cells sharing the
//!    highest value as goals
//! 4. Search from the agent to each goal with the pursuers' reported
//!    positions as obstacles, dropping goals that cannot be reached
//! 5. Rank the paths by [`path_priority`] of their first step (higher first),
//!    then by length (shorter first)
//! 6. Turn the first step of the winner into a [`Move`]
//! 7. Report the move to the tracer and remember the pursuers for step 2 of
//!    the next tick
//!
//! The only state carried between ticks is the graph and the previous
//! pursuer positions, both owned by one [`BotPlayer`].
use std::cmp::Reverse;
use std::collections::HashSet;

use maze_core::{BotConfig, BotFault, CellGraph, Coordinate, Move, Path, find_path};

use crate::error::{BotError, Result};
use crate::estimator::MotionEstimator;
use crate::scorer::{CellScores, path_priority, score_cells};
use crate::snapshot::WorldSnapshot;
use crate::tracer::{NoopTracer, Tracer};

/// Flee policy for one agent over one level.
#[derive(Debug)]
pub struct BotPlayer<T = NoopTracer> {
    config: BotConfig,
    tracer: T,
    graph: Option<CellGraph>,
    previous_pursuers: Option<Vec<Coordinate>>,
}

impl Default for BotPlayer<NoopTracer> {
    fn default() -> Self {
        Self::new(NoopTracer)
    }
}

impl<T: Tracer> BotPlayer<T> {
    pub fn new(tracer: T) -> Self {
        Self::with_config(BotConfig::default(), tracer)
    }

    pub fn with_config(config: BotConfig, tracer: T) -> Self {
        Self {
            config,
            tracer,
            graph: None,
            previous_pursuers: None,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn tracer_mut(&mut self) -> &mut T {
        &mut self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Cached graph, once the first tick has run.
    pub fn graph(&self) -> Option<&CellGraph> {
        self.graph.as_ref()
    }

    pub fn previous_pursuers(&self) -> Option<&[Coordinate]> {
        self.previous_pursuers.as_deref()
    }

    /// Drops the cached graph and pursuer history, e.g. before a new level.
    pub fn reset(&mut self) {
        self.graph = None;
        self.previous_pursuers = None;
    }

    /// Runs one tick and never fails: errors are logged and mapped to
    /// [`Move::Stay`].
    pub fn step(&mut self, snapshot: &WorldSnapshot<'_>) -> Move {
        match self.try_step(snapshot) {
            Ok(mv) => mv,
            Err(err) => {
                tracing::error!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    agent = %snapshot.agent,
                    "tick failed, issuing default move: {err}"
                );
                Move::default()
            }
        }
    }

    /// Runs one tick and reports why it failed, if it did.
    ///
    /// On failure the tracer is not called. A pursuer missing from the
    /// previous snapshot also discards that snapshot, so the next tick
    /// estimates from scratch instead of failing again.
    pub fn try_step(&mut self, snapshot: &WorldSnapshot<'_>) -> Result<Move> {
        let config = &self.config;
        let graph: &CellGraph = self
            .graph
            .get_or_insert_with(|| CellGraph::build(snapshot.maze));

        let found = snapshot.maze.dimensions();
        if let Some(expected) = graph.dimensions().filter(|&expected| expected != found) {
            return Err(BotError::MazeChanged { expected, found });
        }

        let estimator = MotionEstimator::new(
            snapshot.maze,
            self.previous_pursuers.as_deref(),
            config.inertia,
        );
        let estimates = match estimator.estimate_all(&snapshot.pursuers) {
            Ok(estimates) => estimates,
            Err(err) => {
                self.previous_pursuers = None;
                return Err(err);
            }
        };

        let scores = score_cells(graph, &snapshot.pursuers, &estimates, config.close_distance);
        let path = best_path(graph, snapshot, &scores, &estimates, config.close_distance);
        let mv = first_move(graph, snapshot.agent, &path);

        tracing::debug!(
            agent = %snapshot.agent,
            pursuers = snapshot.pursuers.len(),
            path_len = path.len(),
            %mv,
            "tick decided"
        );

        self.tracer.register(snapshot.agent, mv);
        self.previous_pursuers = Some(snapshot.pursuers.clone());

        Ok(mv)
    }
}

/// Highest-ranked path from the agent to one of the best-scored cells.
///
/// Empty when the agent is not on the graph or no best cell is reachable.
pub fn best_path(
    graph: &CellGraph,
    snapshot: &WorldSnapshot<'_>,
    scores: &CellScores,
    estimates: &[Coordinate],
    close_distance: u32,
) -> Path {
    let Some(start) = graph.id(snapshot.agent) else {
        tracing::debug!(agent = %snapshot.agent, "agent is not on a free cell");
        return Path::new();
    };
    let goals = scores.best_cells();
    let obstacles: HashSet<Coordinate> = snapshot.pursuers.iter().copied().collect();

    let mut ranked: Vec<(u32, Path)> = goals
        .iter()
        .filter_map(|&goal| {
            let path = find_path(graph, start, goal, &obstacles);
            let first_step = graph.coordinate(*path.first()?)?;
            Some((path_priority(first_step, estimates, close_distance), path))
        })
        .collect();

    tracing::trace!(
        goals = goals.len(),
        reachable = ranked.len(),
        "ranked candidate paths"
    );

    ranked.sort_by_key(|(priority, path)| (Reverse(*priority), path.len()));
    ranked
        .into_iter()
        .next()
        .map(|(_, path)| path)
        .unwrap_or_default()
}

/// Direction from `agent` onto the first cell of `path`.
///
/// Paths of at most one cell, and first steps no cardinal move reaches
/// (teleport hops), fall back to [`fallback_move`].
pub fn first_move(graph: &CellGraph, agent: Coordinate, path: &Path) -> Move {
    if path.len() <= 1 {
        return fallback_move(graph, agent);
    }

    let next = graph.coordinate(path[0]);
    Move::DIRECTIONS
        .into_iter()
        .find(|&mv| Some(agent.offset(mv)) == next)
        .unwrap_or_else(|| fallback_move(graph, agent))
}

/// First direction in [`Move::DIRECTIONS`] that lands on a graph cell, or
/// [`Move::Stay`] when the agent is boxed in.
pub fn fallback_move(graph: &CellGraph, agent: Coordinate) -> Move {
    Move::DIRECTIONS
        .into_iter()
        .find(|&mv| graph.contains(agent.offset(mv)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::HistoryTracer;
    use maze_core::Maze;

    fn path_of(graph: &CellGraph, coords: &[(i32, i32)]) -> Path {
        coords
            .iter()
            .map(|&c| graph.id(c.into()).unwrap())
            .collect()
    }

    #[test]
    fn first_move_points_at_first_step() {
        let graph = CellGraph::build(&Maze::open(3, 3));
        let agent = Coordinate::new(1, 1);

        let cases = [
            ((0, 1), Move::Up),
            ((2, 1), Move::Down),
            ((1, 0), Move::Left),
            ((1, 2), Move::Right),
        ];
        for (step, expected) in cases {
            let path = path_of(&graph, &[step, (0, 0)]);
            assert_eq!(first_move(&graph, agent, &path), expected);
        }
    }

    #[test]
    fn short_paths_use_fallback() {
        let graph = CellGraph::build(&Maze::open(3, 3));
        let agent = Coordinate::new(0, 0);

        assert_eq!(first_move(&graph, agent, &Path::new()), Move::Down);
        // Single-cell path to the right still takes the fallback.
        let path = path_of(&graph, &[(0, 1)]);
        assert_eq!(first_move(&graph, agent, &path), Move::Down);
    }

    #[test]
    fn teleport_first_step_uses_fallback() {
        let maze = Maze::from_rows(["T.T"]).unwrap();
        let graph = CellGraph::build(&maze);
        let path = path_of(&graph, &[(0, 2), (0, 1)]);
        assert_eq!(first_move(&graph, Coordinate::ORIGIN, &path), Move::Right);
    }

    #[test]
    fn priority_outranks_path_length() {
        let maze = Maze::open(1, 7);
        let graph = CellGraph::build(&maze);
        // Seen at (0, 3) and predicted at (0, 1): only the corridor ends are
        // out of reach and score as goals.
        let reported = [Coordinate::new(0, 3)];
        let estimates = [Coordinate::new(0, 1)];
        let scores = score_cells(&graph, &reported, &estimates, 3);
        assert_eq!(
            scores.best_cells(),
            vec![
                graph.id(Coordinate::new(0, 0)).unwrap(),
                graph.id(Coordinate::new(0, 6)).unwrap()
            ]
        );

        let snapshot = WorldSnapshot::new(&maze, Coordinate::new(0, 2), Vec::<Coordinate>::new());
        let path = best_path(&graph, &snapshot, &scores, &estimates, 3);

        // Left is two cells but starts next to the prediction (priority 0);
        // right is four cells starting two away from it (priority 2).
        assert_eq!(path, path_of(&graph, &[(0, 3), (0, 4), (0, 5), (0, 6)]));
        assert_eq!(first_move(&graph, snapshot.agent, &path), Move::Right);
    }

    #[test]
    fn boxed_in_agent_stays() {
        let maze = Maze::from_rows(["###", "#.#", "###"]).unwrap();
        let graph = CellGraph::build(&maze);
        assert_eq!(fallback_move(&graph, Coordinate::new(1, 1)), Move::Stay);
    }

    #[test]
    fn step_records_trace_and_remembers_pursuers() {
        let maze = Maze::open(5, 5);
        let mut bot = BotPlayer::new(HistoryTracer::new());
        let snapshot = WorldSnapshot::new(&maze, Coordinate::new(2, 2), vec![Coordinate::ORIGIN]);

        let mv = bot.step(&snapshot);

        assert!(!mv.is_stay());
        assert_eq!(bot.tracer().history().len(), 1);
        assert_eq!(bot.tracer().history()[0].position, Coordinate::new(2, 2));
        assert_eq!(bot.previous_pursuers(), Some(&[Coordinate::ORIGIN][..]));
        assert_eq!(bot.graph().map(CellGraph::len), Some(25));
    }

    #[test]
    fn changed_maze_is_rejected_until_reset() {
        let first = Maze::open(4, 4);
        let second = Maze::open(5, 5);
        let mut bot = BotPlayer::new(HistoryTracer::new());

        bot.step(&WorldSnapshot::new(&first, Coordinate::ORIGIN, Vec::<Coordinate>::new()));
        let err = bot
            .try_step(&WorldSnapshot::new(&second, Coordinate::ORIGIN, Vec::<Coordinate>::new()))
            .unwrap_err();
        assert!(matches!(err, BotError::MazeChanged { .. }));
        assert_eq!(
            bot.step(&WorldSnapshot::new(&second, Coordinate::ORIGIN, Vec::<Coordinate>::new())),
            Move::Stay
        );
        assert_eq!(bot.tracer().history().len(), 1);

        bot.reset();
        assert!(
            bot.try_step(&WorldSnapshot::new(&second, Coordinate::ORIGIN, Vec::<Coordinate>::new()))
                .is_ok()
        );
    }
}
