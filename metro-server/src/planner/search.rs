//! A* route search.
//!
//! Searches over (station, line) states rather than bare stations, because
//! whether the next move is a transfer, and therefore what it costs and
//! whether it is allowed, depends on the line currently occupied.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, trace};

use crate::domain::{SearchState, distance_km};
use crate::network::Network;

use super::config::SearchConfig;
use super::frontier::Frontier;
use super::itinerary::{ItineraryStep, build_itinerary};

/// Why no route was returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoRoute {
    /// The start or goal station is not in the network.
    UnknownStation(String),

    /// The required end line does not serve the goal station.
    EndLineNotAtGoal { goal: String, line: String },

    /// Every reachable state was explored without reaching the goal.
    Unreachable,

    /// The configured expansion limit was hit.
    LimitReached { expanded: usize },
}

impl fmt::Display for NoRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoRoute::UnknownStation(name) => write!(f, "unknown station: {name}"),
            NoRoute::EndLineNotAtGoal { goal, line } => {
                write!(f, "line {line} does not serve {goal}")
            }
            NoRoute::Unreachable => f.write_str("no route exists"),
            NoRoute::LimitReached { expanded } => {
                write!(f, "search stopped after expanding {expanded} states")
            }
        }
    }
}

/// A found route.
#[derive(Debug, Clone)]
pub struct Route {
    /// Station names from start to goal. An interchange within one
    /// station appears once.
    pub stations: Vec<String>,

    /// The full (station, line) path from start to goal.
    pub states: Vec<SearchState>,

    /// Display steps: start, each transfer, destination.
    pub itinerary: Vec<ItineraryStep>,

    /// Accumulated cost of the path.
    pub total_cost: f64,

    /// Number of line changes along the path.
    pub transfer_count: usize,

    /// Number of states expanded during search.
    pub states_explored: usize,
}

impl Route {
    /// Line occupied on arrival at the goal.
    pub fn end_line(&self) -> Option<&str> {
        self.states.last().map(|s| s.line.as_str())
    }

    /// Itinerary rendered as text lines.
    pub fn itinerary_text(&self) -> Vec<String> {
        self.itinerary.iter().map(ToString::to_string).collect()
    }
}

/// Outcome of a route search.
///
/// Not finding a route is an ordinary outcome, not an error.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(Route),
    NotFound(NoRoute),
}

impl SearchOutcome {
    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The route, if found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NotFound(_) => None,
        }
    }

    /// Consume the outcome, returning the route if found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NotFound(_) => None,
        }
    }
}

/// Mutable state for one search. Created per call and dropped afterwards.
#[derive(Default)]
struct SearchSession {
    frontier: Frontier,
    g_scores: HashMap<SearchState, f64>,
    came_from: HashMap<SearchState, SearchState>,
    transfers: HashMap<SearchState, usize>,
    explored: HashSet<SearchState>,
}

impl SearchSession {
    fn seed(&mut self, state: SearchState, priority: f64) {
        self.g_scores.insert(state.clone(), 0.0);
        self.transfers.insert(state.clone(), 0);
        self.frontier.put(state, priority);
    }

    fn into_route(mut self, last: SearchState, states_explored: usize) -> Route {
        let total_cost = self.g_scores.get(&last).copied().unwrap_or(0.0);
        let transfer_count = self.transfers.get(&last).copied().unwrap_or(0);

        let mut states = vec![last.clone()];
        let mut cursor = last;
        // Start states have no predecessor
        while let Some(prev) = self.came_from.remove(&cursor) {
            states.push(prev.clone());
            cursor = prev;
        }
        states.reverse();

        let mut stations: Vec<String> = states.iter().map(|s| s.station.clone()).collect();
        stations.dedup();

        Route {
            stations,
            itinerary: build_itinerary(&states),
            states,
            total_cost,
            transfer_count,
            states_explored,
        }
    }
}

/// Route planner over a prebuilt network.
///
/// The planner only borrows the network and configuration; every call to
/// [`Planner::find_path`] allocates its own search state, so one planner
/// (or many) can serve concurrent queries.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find the least-cost route from `start` to `goal`.
    ///
    /// If `end_line` is given, the route must arrive at `goal` on that line.
    pub fn find_path(&self, start: &str, goal: &str, end_line: Option<&str>) -> SearchOutcome {
        let graph = &self.network.graph;

        let Some(start_station) = graph.station(start) else {
            return SearchOutcome::NotFound(NoRoute::UnknownStation(start.to_string()));
        };
        let Some(goal_station) = graph.station(goal) else {
            return SearchOutcome::NotFound(NoRoute::UnknownStation(goal.to_string()));
        };
        if let Some(line) = end_line
            && !goal_station.serves(line)
        {
            return SearchOutcome::NotFound(NoRoute::EndLineNotAtGoal {
                goal: goal.to_string(),
                line: line.to_string(),
            });
        }

        let mut session = SearchSession::default();
        let start_h = distance_km(&start_station.coord, &goal_station.coord);
        for line in &start_station.lines {
            session.seed(SearchState::new(start, line.as_str()), start_h);
        }

        let mut expanded = 0;

        while let Some(current) = session.frontier.pop() {
            if current.station == goal && end_line.is_none_or(|line| line == current.line) {
                debug!(
                    start,
                    goal,
                    expanded,
                    frontier = session.frontier.len(),
                    "Route found"
                );
                return SearchOutcome::Found(session.into_route(current, expanded));
            }

            if !session.explored.insert(current.clone()) {
                continue;
            }

            expanded += 1;
            if let Some(limit) = self.config.max_expansions
                && expanded > limit
            {
                debug!(start, goal, limit, "Search expansion limit reached");
                return SearchOutcome::NotFound(NoRoute::LimitReached { expanded: limit });
            }

            let Some(station) = graph.station(&current.station) else {
                continue;
            };
            let Some(&g) = session.g_scores.get(&current) else {
                continue;
            };
            let changes = session.transfers.get(&current).copied().unwrap_or(0);

            trace!(state = %current, g, changes, "Expanding state");

            for next in &station.edges {
                if !self.network.transfers.is_valid(&current, next)
                    || session.explored.contains(next)
                {
                    continue;
                }
                let Some(next_station) = graph.station(&next.station) else {
                    continue;
                };

                let changes_line = !current.same_line(next);
                let distance = distance_km(&station.coord, &next_station.coord);
                let tentative = g + self.config.edge_cost(distance, changes_line);

                let improves = session
                    .g_scores
                    .get(next)
                    .is_none_or(|&known| tentative < known);
                if !improves {
                    continue;
                }

                session.g_scores.insert(next.clone(), tentative);
                session.came_from.insert(next.clone(), current.clone());
                session
                    .transfers
                    .insert(next.clone(), changes + usize::from(changes_line));

                let h = distance_km(&next_station.coord, &goal_station.coord);
                session.frontier.put(next.clone(), tentative + h);
            }
        }

        debug!(start, goal, expanded, "No route found");
        SearchOutcome::NotFound(NoRoute::Unreachable)
    }
}
