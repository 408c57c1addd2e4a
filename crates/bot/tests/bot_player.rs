use maze_content::ConfigLoader;
use maze_core::{BotConfig, CellGraph, Coordinate, Maze, Move};
use pursuit_bot::policy::best_path;
use pursuit_bot::{
    BotError, BotPlayer, CellScores, HistoryTracer, LogTracer, MotionEstimator, WorldSnapshot,
    score_cells,
};

const LEVEL: [&str; 7] = [
    "#########",
    "#.......#",
    "#.##.##.#",
    "T.......T",
    "#.##.##.#",
    "#.......#",
    "#########",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn level() -> Maze {
    Maze::from_rows(LEVEL).unwrap()
}

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn flees_along_a_corridor_away_from_the_pursuer() {
    init_tracing();
    let maze = Maze::from_rows(["......."]).unwrap();
    let mut bot = BotPlayer::new(HistoryTracer::new());

    let mv = bot.step(&WorldSnapshot::new(&maze, at(0, 3), vec![at(0, 0)]));

    assert_eq!(mv, Move::Right);
}

#[test]
fn repeated_ticks_fill_the_trace_history() {
    init_tracing();
    let maze = level();
    let mut bot = BotPlayer::new(HistoryTracer::new());

    for pursuer in [at(1, 1), at(1, 2), at(1, 3)] {
        let mv = bot.step(&WorldSnapshot::new(&maze, at(3, 4), vec![pursuer]));
        assert_eq!(mv, Move::Down);
    }

    assert_eq!(
        bot.tracer().lines(),
        vec![
            "current (3, 4), step (1, 0)",
            "current (3, 4), step (1, 0)",
            "current (3, 4), step (1, 0)",
        ]
    );
    assert_eq!(bot.previous_pursuers(), Some(&[at(1, 3)][..]));
}

#[test]
fn pursuer_momentum_changes_the_escape_route() {
    init_tracing();
    let maze = level();

    // Without history the pursuer at (3, 2) is treated as standing still.
    let mut fresh = BotPlayer::new(HistoryTracer::new());
    let fresh_move = fresh.step(&WorldSnapshot::new(&maze, at(1, 1), vec![at(3, 2)]));

    // Seen moving right, it is predicted at (3, 4) next tick.
    let mut tracking = BotPlayer::new(HistoryTracer::new());
    tracking.step(&WorldSnapshot::new(&maze, at(1, 1), vec![at(3, 1)]));
    let tracking_move = tracking.step(&WorldSnapshot::new(&maze, at(1, 1), vec![at(3, 2)]));

    assert_eq!(fresh_move, Move::Right);
    assert_eq!(tracking_move, Move::Down);
}

#[test]
fn estimator_prefers_largest_free_shift() {
    let maze = Maze::from_rows([".", ".", ".", "#"]).unwrap();
    let previous = [at(0, 0)];

    let two = MotionEstimator::new(&maze, Some(&previous), 2);
    assert_eq!(two.estimate(at(1, 0), 0), Ok(at(2, 0)));

    let walled = Maze::from_rows([".", ".", "#", "#"]).unwrap();
    let blocked = MotionEstimator::new(&walled, Some(&previous), 2);
    assert_eq!(blocked.estimate(at(1, 0), 0), Ok(at(1, 0)));

    let open = Maze::open(4, 1);
    let free = MotionEstimator::new(&open, Some(&previous), 2);
    assert_eq!(free.estimate(at(1, 0), 0), Ok(at(3, 0)));
}

#[test]
fn distant_pursuer_makes_every_cell_a_goal_ranked_by_length() {
    let maze = Maze::open(5, 5);
    let graph = CellGraph::build(&maze);
    let pursuers = vec![at(0, 30)];
    let snapshot = WorldSnapshot::new(&maze, at(2, 2), pursuers.clone());

    let scores = score_cells(&graph, &pursuers, &pursuers, 10);
    assert_eq!(scores.best_cells().len(), graph.len());
    assert_eq!(scores.max(), Some(CellScores::SAFE));

    let path = best_path(&graph, &snapshot, &scores, &pursuers, 10);
    assert_eq!(path.len(), 1);
    assert_eq!(graph.coordinate(path[0]), Some(at(1, 2)));

    let mut bot = BotPlayer::with_config(
        BotConfig::default().with_close_distance(10),
        HistoryTracer::new(),
    );
    assert_eq!(bot.step(&snapshot), Move::Up);
}

#[test]
fn agent_off_the_graph_takes_first_open_direction() {
    init_tracing();
    let maze = Maze::from_rows(["...", ".#.", "..."]).unwrap();
    let mut bot = BotPlayer::new(HistoryTracer::new());

    let mv = bot.step(&WorldSnapshot::new(&maze, at(1, 1), vec![at(2, 2)]));

    assert_eq!(mv, Move::Up);
}

#[test]
fn new_pursuer_fails_one_tick_then_recovers() {
    init_tracing();
    let maze = level();
    let mut bot = BotPlayer::new(HistoryTracer::new());

    bot.step(&WorldSnapshot::new(&maze, at(3, 4), vec![at(1, 1)]));
    let err = bot
        .try_step(&WorldSnapshot::new(&maze, at(3, 4), vec![at(1, 2), at(5, 7)]))
        .unwrap_err();
    assert_eq!(
        err,
        BotError::PursuerIndexOutOfRange {
            index: 1,
            previous_len: 1
        }
    );
    assert_eq!(bot.previous_pursuers(), None);
    assert_eq!(bot.tracer().history().len(), 1);

    let mv = bot.step(&WorldSnapshot::new(&maze, at(3, 4), vec![at(1, 2), at(5, 7)]));
    assert!(!mv.is_stay());
    assert_eq!(bot.tracer().history().len(), 2);
}

#[test]
fn step_masks_failures_with_default_move() {
    init_tracing();
    let maze = level();
    let mut bot = BotPlayer::new(HistoryTracer::new());

    bot.step(&WorldSnapshot::new(&maze, at(3, 4), Vec::<Coordinate>::new()));
    let mv = bot.step(&WorldSnapshot::new(&maze, at(3, 4), vec![at(1, 1)]));

    assert_eq!(mv, Move::default());
    assert_eq!(bot.tracer().history().len(), 1);
}

#[test]
fn loaded_config_drives_the_player() {
    let config = ConfigLoader::parse("inertia = 0\nclose_distance = 4\n").unwrap();
    let maze = level();
    let mut bot = BotPlayer::with_config(config.clone(), HistoryTracer::new());

    let mv = bot.step(&WorldSnapshot::new(&maze, at(3, 4), vec![at(1, 1)]));

    assert_eq!(mv, Move::Up);
    assert_eq!(bot.config(), &config);
    assert_eq!(bot.graph().map(CellGraph::len), Some(29));
}

#[test]
fn oversized_inertia_never_crashes_a_tick() {
    init_tracing();
    let maze = level();

    for inertia in [1 << 31, u32::MAX] {
        let mut bot = BotPlayer::with_config(
            BotConfig::default().with_inertia(inertia),
            HistoryTracer::new(),
        );
        bot.step(&WorldSnapshot::new(&maze, at(1, 1), vec![at(3, 1)]));
        bot.try_step(&WorldSnapshot::new(&maze, at(1, 1), vec![at(3, 2)]))
            .unwrap();

        assert_eq!(bot.tracer().history().len(), 2);
    }
}

#[test]
fn log_tracer_drives_the_same_decisions() {
    init_tracing();
    let maze = level();
    let mut logged = BotPlayer::new(LogTracer);
    let mut recorded = BotPlayer::new(HistoryTracer::new());

    for pursuer in [at(1, 1), at(1, 2), at(1, 3)] {
        let snapshot = WorldSnapshot::new(&maze, at(3, 4), vec![pursuer]);
        assert_eq!(logged.try_step(&snapshot), recorded.try_step(&snapshot));
    }
    assert_eq!(logged.previous_pursuers(), Some(&[at(1, 3)][..]));
}
