//! Randomized checks of every strategy against the distance maps.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mazewalk_core::{Maze, Point, Tile};

use crate::{
    Bidirectional, Outcome, Search, SearchConfig, StepCost, Strategy, Trace, bfs_map, connected,
    dijkstra_map, reachable, run_search, run_search_with,
};

fn random_maze(rng: &mut StdRng) -> Maze {
    let rows = rng.random_range(1..=9usize);
    let cols = rng.random_range(2..=9usize);
    let mut tiles: Vec<Tile> = (0..rows * cols)
        .map(|_| {
            if rng.random_bool(0.3) {
                Tile::Wall
            } else {
                Tile::Open(rng.random_range(1..=5))
            }
        })
        .collect();
    let s = rng.random_range(0..tiles.len());
    let mut g = rng.random_range(0..tiles.len() - 1);
    if g >= s {
        g += 1;
    }
    tiles[s] = Tile::Start;
    tiles[g] = Tile::Goal;
    Maze::new(rows, cols, tiles).unwrap()
}

fn mazes(seed: u64, n: usize) -> Vec<Maze> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| random_maze(&mut rng)).collect()
}

fn check_path(m: &Maze, outcome: &Outcome) {
    let path = outcome.path().unwrap();
    assert!(path.is_contiguous(), "{m}");
    assert_eq!(path.first(), Some(m.start()));
    assert_eq!(path.last(), Some(m.goal()));
    assert!(path.iter().all(|&p| m.is_passable(p)));
}

#[test]
fn found_iff_connected() {
    for m in mazes(1, 300) {
        let linked = connected(&m, m.bounds(), m.start(), m.goal());
        for s in Strategy::ALL {
            let outcome = run_search(s, &m, &mut Trace::new());
            assert_eq!(outcome.is_found(), linked, "{s} on\n{m}");
            if linked {
                check_path(&m, &outcome);
            }
        }
    }
}

#[test]
fn unweighted_shortest() {
    for m in mazes(2, 300) {
        let dist = bfs_map(&m, m.bounds(), &[m.start()]);
        let Some(d) = dist.get(m.goal()) else {
            continue;
        };
        for s in [Strategy::Bfs, Strategy::Bidirectional] {
            let outcome = run_search(s, &m, &mut Trace::new());
            assert_eq!(outcome.path().unwrap().edges() as i32, d, "{s} on\n{m}");
        }
        let config = SearchConfig::default().with_astar_step(StepCost::Unit);
        let outcome =
            run_search_with(Strategy::AStar, &m, &config, &mut Trace::new(), &Default::default()).unwrap();
        assert_eq!(outcome.path().unwrap().edges() as i32, d, "unit A* on\n{m}");
    }
}

#[test]
fn weighted_cheapest() {
    for m in mazes(3, 300) {
        let cost = dijkstra_map(&m, m.bounds(), &[m.start()]);
        let Some(best) = cost.get(m.goal()) else {
            continue;
        };
        for s in Strategy::ALL {
            if !s.is_cost_optimal(&SearchConfig::default()) {
                continue;
            }
            let outcome = run_search(s, &m, &mut Trace::new());
            assert_eq!(outcome.path().unwrap().cost(&m), best, "{s} on\n{m}");
        }
    }
}

#[test]
fn deterministic() {
    for m in mazes(4, 50) {
        for s in Strategy::ALL {
            let mut a = Trace::new();
            let mut b = Trace::new();
            let pa = run_search(s, &m, &mut a);
            let pb = run_search(s, &m, &mut b);
            assert_eq!(pa, pb);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn bidirectional_meeting_in_both_waves() {
    for m in mazes(5, 300) {
        let mut bi = Bidirectional::new(&m, m.start(), m.goal());
        if !bi.run(&mut Trace::new()).is_found() {
            assert_eq!(bi.meeting(), None);
            continue;
        }
        let meeting = bi.meeting().unwrap();
        assert!(bi.forward_visited().contains(&meeting));
        assert!(bi.backward_visited().contains(&meeting));
    }
}

#[test]
fn open_3x3() {
    let m = Maze::parse("S..\n...\n..G").unwrap();
    for s in Strategy::ALL {
        let outcome = run_search(s, &m, &mut Trace::new());
        let len = outcome.path().unwrap().len();
        if s == Strategy::Dfs {
            assert!((5..=9).contains(&len));
        } else {
            assert_eq!(len, 5, "{s}");
        }
        check_path(&m, &outcome);
    }
}

#[test]
fn walled_off_goal_stays_dark() {
    let m = Maze::parse("S...#...\n....#.#.\n....#.#G\n....#..#").unwrap();
    let side: Vec<Point> = reachable(&m, m.bounds(), m.start());
    for s in Strategy::ALL {
        let mut trace = Trace::new();
        assert_eq!(run_search(s, &m, &mut trace), Outcome::NotFound, "{s}");
        assert_eq!(trace.path_steps().count(), 0);
        if s == Strategy::Bidirectional {
            // The backward wave only knows the goal's own component.
            assert!(trace.visited().all(|p| side.contains(&p) || p.col > 4), "{s}");
        } else {
            assert!(trace.visited().all(|p| side.contains(&p)), "{s}");
        }
    }
}
