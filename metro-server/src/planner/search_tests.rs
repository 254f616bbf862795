//! Scenario and property tests for the A* route search.

use std::collections::HashMap;

use crate::domain::{Coordinate, SearchState, distance_km};
use crate::network::{Network, StationRecord, TransferRule};

use super::config::SearchConfig;
use super::itinerary::ItineraryStep;
use super::search::{NoRoute, Planner, Route, SearchOutcome};

fn coord(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat).unwrap()
}

fn record(station: &str, line: &str, lon: f64, lat: f64, order: i64) -> StationRecord {
    StationRecord::new(station, line, coord(lon, lat), Some(order))
}

/// A-B-C on L1, C-D on L2, running north along the prime meridian.
fn abcd_records() -> Vec<StationRecord> {
    vec![
        record("A", "L1", 0.0, 0.0, 0),
        record("B", "L1", 0.0, 0.009, 1),
        record("C", "L1", 0.0, 0.018, 2),
        record("C", "L2", 0.0, 0.018, 0),
        record("D", "L2", 0.0, 0.027, 1),
    ]
}

fn abcd_network() -> Network {
    Network::build(&abcd_records(), &[TransferRule::interchange("C", "L1", "L2")])
}

fn dist(network: &Network, a: &str, b: &str) -> f64 {
    let a = network.graph.station(a).unwrap();
    let b = network.graph.station(b).unwrap();
    distance_km(&a.coord, &b.coord)
}

fn expect_route(outcome: SearchOutcome) -> Route {
    match outcome {
        SearchOutcome::Found(route) => route,
        SearchOutcome::NotFound(reason) => panic!("expected a route, got {reason}"),
    }
}

fn expect_no_route(outcome: SearchOutcome) -> NoRoute {
    match outcome {
        SearchOutcome::Found(route) => panic!("expected no route, got {:?}", route.stations),
        SearchOutcome::NotFound(reason) => reason,
    }
}

/// Recompute a route's cost edge by edge.
fn path_cost(network: &Network, config: &SearchConfig, states: &[SearchState]) -> f64 {
    states
        .windows(2)
        .map(|pair| {
            let d = dist(network, &pair[0].station, &pair[1].station);
            config.edge_cost(d, !pair[0].same_line(&pair[1]))
        })
        .sum()
}

#[test]
fn transfer_at_interchange() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "D", None));

    assert_eq!(route.stations, vec!["A", "B", "C", "D"]);
    assert_eq!(route.transfer_count, 1);
    assert_eq!(
        route.states,
        vec![
            SearchState::new("A", "L1"),
            SearchState::new("B", "L1"),
            SearchState::new("C", "L1"),
            SearchState::new("C", "L2"),
            SearchState::new("D", "L2"),
        ]
    );

    let expected =
        dist(&network, "A", "B") + dist(&network, "B", "C") + 0.5 + dist(&network, "C", "D");
    assert!((route.total_cost - expected).abs() < 1e-9);
    assert_eq!(route.end_line(), Some("L2"));
}

#[test]
fn itinerary_for_transfer_route() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "D", None));

    assert_eq!(
        route.itinerary_text(),
        vec![
            "Start: A (L1)",
            "Transfer at C: L1 → L2",
            "Destination: D (L2)",
        ]
    );
    assert!(matches!(
        route.itinerary[1],
        ItineraryStep::Transfer { ref station, .. } if station == "C"
    ));
}

#[test]
fn unauthorised_transfer_has_no_route() {
    let network = Network::build(&abcd_records(), &[]);
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    assert_eq!(
        expect_no_route(planner.find_path("A", "D", None)),
        NoRoute::Unreachable
    );
}

#[test]
fn same_line_route_has_no_transfers() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "C", None));

    assert_eq!(route.stations, vec!["A", "B", "C"]);
    assert_eq!(route.transfer_count, 0);
    let expected = dist(&network, "A", "B") + dist(&network, "B", "C");
    assert!((route.total_cost - expected).abs() < 1e-9);
}

#[test]
fn reverse_direction() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("D", "A", None));

    assert_eq!(route.stations, vec!["D", "C", "B", "A"]);
    assert_eq!(route.transfer_count, 1);
}

#[test]
fn unknown_stations() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    assert_eq!(
        expect_no_route(planner.find_path("Nowhere", "D", None)),
        NoRoute::UnknownStation("Nowhere".to_string())
    );
    assert_eq!(
        expect_no_route(planner.find_path("A", "Nowhere", None)),
        NoRoute::UnknownStation("Nowhere".to_string())
    );
}

#[test]
fn start_equals_goal() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("B", "B", None));

    assert_eq!(route.stations, vec!["B"]);
    assert_eq!(route.states, vec![SearchState::new("B", "L1")]);
    assert_eq!(route.total_cost, 0.0);
    assert_eq!(route.transfer_count, 0);
    assert_eq!(
        route.itinerary_text(),
        vec!["Start: B (L1)", "Destination: B (L1)"]
    );
}

#[test]
fn start_equals_goal_on_required_line() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    // C is seeded on both lines, so no transfer is needed
    let route = expect_route(planner.find_path("C", "C", Some("L2")));

    assert_eq!(route.states, vec![SearchState::new("C", "L2")]);
    assert_eq!(route.total_cost, 0.0);
    assert_eq!(route.transfer_count, 0);
}

/// A-B on L1, B-G on L2, G-H on L3. Changing at B is allowed, at G is not.
fn end_line_network() -> Network {
    let records = vec![
        record("A", "L1", 0.0, 0.0, 0),
        record("B", "L1", 0.0, 0.01, 1),
        record("B", "L2", 0.0, 0.01, 0),
        record("G", "L2", 0.0, 0.02, 1),
        record("G", "L3", 0.0, 0.02, 0),
        record("H", "L3", 0.0, 0.03, 1),
    ];
    Network::build(&records, &[TransferRule::interchange("B", "L1", "L2")])
}

#[test]
fn required_end_line_unreachable() {
    let network = end_line_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    // G is reachable on L2, but arriving on L3 needs a forbidden change
    assert!(planner.find_path("A", "G", None).is_found());
    assert_eq!(
        expect_no_route(planner.find_path("A", "G", Some("L3"))),
        NoRoute::Unreachable
    );
}

#[test]
fn required_end_line_matches() {
    let network = end_line_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "G", Some("L2")));

    assert_eq!(route.stations, vec!["A", "B", "G"]);
    assert_eq!(route.end_line(), Some("L2"));
    assert_eq!(route.transfer_count, 1);
}

#[test]
fn required_end_line_not_serving_goal() {
    let network = end_line_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    assert_eq!(
        expect_no_route(planner.find_path("A", "G", Some("L1"))),
        NoRoute::EndLineNotAtGoal {
            goal: "G".to_string(),
            line: "L1".to_string(),
        }
    );
}

#[test]
fn required_end_line_forces_extra_transfer() {
    let records = vec![
        record("A", "L1", 0.0, 0.0, 0),
        record("B", "L1", 0.0, 0.01, 1),
        record("B", "L2", 0.0, 0.01, 0),
    ];
    let network = Network::build(&records, &[TransferRule::interchange("B", "L1", "L2")]);
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let direct = expect_route(planner.find_path("A", "B", None));
    assert_eq!(direct.transfer_count, 0);

    let on_l2 = expect_route(planner.find_path("A", "B", Some("L2")));
    assert_eq!(on_l2.transfer_count, 1);
    assert_eq!(on_l2.stations, vec!["A", "B"]);
    assert!((on_l2.total_cost - (direct.total_cost + 0.5)).abs() < 1e-9);
}

#[test]
fn boards_best_line_at_multi_line_start() {
    // L1 runs A-B-C with a slight kink; L2 runs straight A-X-C.
    let records = vec![
        record("A", "L1", 0.0, 0.0, 0),
        record("B", "L1", 0.001, 0.01, 1),
        record("C", "L1", 0.0, 0.02, 2),
        record("A", "L2", 0.0, 0.0, 0),
        record("X", "L2", 0.0, 0.01, 1),
        record("C", "L2", 0.0, 0.02, 2),
    ];
    let rules = vec![
        TransferRule::interchange("A", "L1", "L2"),
        TransferRule::interchange("C", "L1", "L2"),
    ];
    let network = Network::build(&records, &rules);
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "C", None));

    // A is seeded on both lines, so L2 is boarded directly
    assert_eq!(route.stations, vec!["A", "X", "C"]);
    assert_eq!(route.transfer_count, 0);
}

#[test]
fn takes_transfer_when_it_shortens_trip() {
    // L1 loops far east before reaching D; L2 goes straight there from B.
    let records = vec![
        record("A", "L1", 0.0, 0.0, 0),
        record("B", "L1", 0.0, 0.01, 1),
        record("E", "L1", 0.5, 0.01, 2),
        record("D", "L1", 0.0, 0.03, 3),
        record("B", "L2", 0.0, 0.01, 0),
        record("D", "L2", 0.0, 0.03, 1),
    ];
    let rules = vec![TransferRule::interchange("B", "L1", "L2")];
    let network = Network::build(&records, &rules);
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "D", Some("L2")));
    assert_eq!(route.stations, vec!["A", "B", "D"]);
    assert_eq!(route.transfer_count, 1);

    let route = expect_route(planner.find_path("A", "D", None));
    assert_eq!(route.stations, vec!["A", "B", "D"]);
}

#[test]
fn cross_station_transfer_rule() {
    // Walking link between two different stations on different lines
    let records = vec![
        record("A", "L1", 0.0, 0.0, 0),
        record("B", "L1", 0.0, 0.01, 1),
        record("P", "L2", 0.001, 0.01, 0),
        record("Q", "L2", 0.001, 0.02, 1),
    ];
    let rules = vec![TransferRule::new("B", "L1", "P", "L2")];
    let network = Network::build(&records, &rules);
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "Q", None));

    assert_eq!(route.stations, vec!["A", "B", "P", "Q"]);
    assert_eq!(route.transfer_count, 1);
    let expected = dist(&network, "A", "B")
        + dist(&network, "B", "P") * 2.0
        + 0.5
        + dist(&network, "P", "Q");
    assert!((route.total_cost - expected).abs() < 1e-9);
}

#[test]
fn custom_transfer_penalty() {
    let network = abcd_network();
    let config = SearchConfig::new(2.0, 3.0, None);
    let planner = Planner::new(&network, &config);

    let route = expect_route(planner.find_path("A", "D", None));
    let expected =
        dist(&network, "A", "B") + dist(&network, "B", "C") + 3.0 + dist(&network, "C", "D");
    assert!((route.total_cost - expected).abs() < 1e-9);
}

#[test]
fn expansion_limit() {
    let network = abcd_network();
    let config = SearchConfig::new(2.0, 0.5, Some(1));
    let planner = Planner::new(&network, &config);

    assert_eq!(
        expect_no_route(planner.find_path("A", "D", None)),
        NoRoute::LimitReached { expanded: 1 }
    );
}

#[test]
fn repeated_queries_are_independent() {
    let network = abcd_network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let first = expect_route(planner.find_path("A", "D", None));
    assert!(!planner.find_path("A", "Nowhere", None).is_found());
    let second = expect_route(planner.find_path("A", "D", None));

    assert_eq!(first.states, second.states);
    assert_eq!(first.total_cost, second.total_cost);
    assert_eq!(first.states_explored, second.states_explored);
}

#[test]
fn concurrent_searches_share_network() {
    let network = abcd_network();
    let config = SearchConfig::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let (network, config) = (&network, &config);
                scope.spawn(move || {
                    let planner = Planner::new(network, config);
                    let (start, goal) = if i % 2 == 0 { ("A", "D") } else { ("D", "A") };
                    expect_route(planner.find_path(start, goal, None))
                })
            })
            .collect();

        for handle in handles {
            let route = handle.join().unwrap();
            assert_eq!(route.stations.len(), 4);
            assert_eq!(route.transfer_count, 1);
        }
    });
}

/// Exhaustive uniform-cost search, used as an oracle for optimal cost.
fn oracle_cost(
    network: &Network,
    config: &SearchConfig,
    start: &str,
    goal: &str,
    end_line: Option<&str>,
) -> Option<f64> {
    let graph = &network.graph;
    let start_station = graph.station(start)?;
    graph.station(goal)?;

    let mut best: HashMap<SearchState, f64> = start_station
        .lines
        .iter()
        .map(|l| (SearchState::new(start, l.as_str()), 0.0))
        .collect();
    let mut done: Vec<SearchState> = Vec::new();

    loop {
        let next = best
            .iter()
            .filter(|(s, _)| !done.contains(s))
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(s, c)| (s.clone(), *c));
        let Some((state, cost)) = next else {
            return None;
        };
        if state.station == goal && end_line.is_none_or(|l| l == state.line) {
            return Some(cost);
        }
        done.push(state.clone());

        let station = graph.station(&state.station)?;
        for edge in &station.edges {
            if !network.transfers.is_valid(&state, edge) {
                continue;
            }
            let to = graph.station(&edge.station)?;
            let step = config.edge_cost(
                distance_km(&station.coord, &to.coord),
                !state.same_line(edge),
            );
            let candidate = cost + step;
            if best.get(edge).is_none_or(|&c| candidate < c) {
                best.insert(edge.clone(), candidate);
            }
        }
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const POOL: usize = 8;
    const LINES: [&str; 3] = ["L0", "L1", "L2"];

    #[derive(Debug, Clone)]
    struct Generated {
        coords: Vec<(f64, f64)>,
        lines: Vec<Vec<usize>>,
        rules: Vec<(usize, usize, usize, usize)>,
    }

    impl Generated {
        fn network(&self) -> Network {
            let mut records = Vec::new();
            for (line_idx, members) in self.lines.iter().enumerate() {
                for (order, &s) in members.iter().enumerate() {
                    let (lon, lat) = self.coords[s];
                    records.push(record(&format!("S{s}"), LINES[line_idx], lon, lat, order as i64));
                }
            }
            let rules: Vec<TransferRule> = self
                .rules
                .iter()
                .map(|&(sa, la, sb, lb)| {
                    TransferRule::new(format!("S{sa}"), LINES[la], format!("S{sb}"), LINES[lb])
                })
                .collect();
            Network::build(&records, &rules)
        }
    }

    fn generated() -> impl Strategy<Value = Generated> {
        let coords = prop::collection::vec((0.0f64..0.1, 0.0f64..0.1), POOL);
        let line = prop::sample::subsequence((0..POOL).collect::<Vec<_>>(), 2..=5).prop_shuffle();
        let lines = prop::collection::vec(line, LINES.len());
        let rule = (0..POOL, 0..LINES.len(), 0..POOL, 0..LINES.len());
        let rules = prop::collection::vec(rule, 0..12);
        (coords, lines, rules).prop_map(|(coords, lines, rules)| Generated {
            coords,
            lines,
            rules,
        })
    }

    proptest! {
        /// Found routes are well-formed, cost what their edges cost, and
        /// are optimal; absent routes are confirmed absent.
        #[test]
        fn routes_are_consistent_and_optimal(
            g in generated(),
            start in 0..POOL,
            goal in 0..POOL,
            end_line in prop::option::of(0..LINES.len()),
        ) {
            let network = g.network();
            let config = SearchConfig::default();
            let planner = Planner::new(&network, &config);

            let start = format!("S{start}");
            let goal = format!("S{goal}");
            let end_line = end_line.map(|i| LINES[i]);

            let outcome = planner.find_path(&start, &goal, end_line);
            let oracle = oracle_cost(&network, &config, &start, &goal, end_line);

            match outcome {
                SearchOutcome::Found(route) => {
                    prop_assert_eq!(route.stations.first(), Some(&start));
                    prop_assert_eq!(route.stations.last(), Some(&goal));
                    if let Some(line) = end_line {
                        prop_assert_eq!(route.end_line(), Some(line));
                    }

                    let changes = route
                        .states
                        .windows(2)
                        .filter(|p| !p[0].same_line(&p[1]))
                        .count();
                    prop_assert_eq!(route.transfer_count, changes);

                    for pair in route.states.windows(2) {
                        let from = network.graph.station(&pair[0].station).unwrap();
                        prop_assert!(from.edges.contains(&pair[1]));
                        prop_assert!(network.transfers.is_valid(&pair[0], &pair[1]));
                    }
                    for state in &route.states {
                        let station = network.graph.station(&state.station).unwrap();
                        prop_assert!(station.serves(&state.line));
                    }

                    let recomputed = path_cost(&network, &config, &route.states);
                    prop_assert!((route.total_cost - recomputed).abs() < 1e-9);

                    let best = oracle.expect("oracle found no route");
                    prop_assert!((route.total_cost - best).abs() < 1e-6);
                }
                SearchOutcome::NotFound(_) => {
                    prop_assert!(oracle.is_none());
                }
            }
        }
    }
}
