//! Built-in sample graphs
//!
//! Fifteen US cities joined by 26 roads, weighted by driving distance in
//! miles.

use crate::graph::Graph;

pub const CITIES: [&str; 15] = [
    "Seattle",
    "San Francisco",
    "Los Angeles",
    "Riverside",
    "Phoenix",
    "Chicago",
    "Boston",
    "New York",
    "Atlanta",
    "Miami",
    "Dallas",
    "Houston",
    "Detroit",
    "Philadelphia",
    "Washington",
];

pub const ROADS: [(&str, &str, f64); 26] = [
    ("Seattle", "Chicago", 1737.0),
    ("Seattle", "San Francisco", 678.0),
    ("San Francisco", "Riverside", 386.0),
    ("San Francisco", "Los Angeles", 348.0),
    ("Los Angeles", "Riverside", 50.0),
    ("Los Angeles", "Phoenix", 357.0),
    ("Riverside", "Phoenix", 307.0),
    ("Riverside", "Chicago", 1704.0),
    ("Phoenix", "Dallas", 887.0),
    ("Phoenix", "Houston", 1015.0),
    ("Dallas", "Chicago", 805.0),
    ("Dallas", "Atlanta", 721.0),
    ("Dallas", "Houston", 225.0),
    ("Houston", "Atlanta", 702.0),
    ("Houston", "Miami", 968.0),
    ("Atlanta", "Chicago", 588.0),
    ("Atlanta", "Washington", 543.0),
    ("Atlanta", "Miami", 604.0),
    ("Miami", "Washington", 923.0),
    ("Chicago", "Detroit", 238.0),
    ("Detroit", "Boston", 613.0),
    ("Detroit", "Washington", 396.0),
    ("Detroit", "New York", 482.0),
    ("Boston", "New York", 190.0),
    ("New York", "Philadelphia", 81.0),
    ("Philadelphia", "Washington", 123.0),
];

fn build(weighted: bool) -> Graph<String> {
    let mut graph = Graph::with_vertices(CITIES.iter().map(|c| c.to_string()));
    for (from, to, miles) in ROADS {
        let u = graph
            .index_of(&from.to_string())
            .unwrap_or_else(|| unreachable!("road endpoint {} is not a city", from));
        let v = graph
            .index_of(&to.to_string())
            .unwrap_or_else(|| unreachable!("road endpoint {} is not a city", to));
        graph.add_edge(u, v, if weighted { miles } else { 1.0 });
    }
    graph
}

/// The city network with every road weighted 1
pub fn city_graph() -> Graph<String> {
    build(false)
}

/// The city network weighted by road distance
pub fn weighted_city_graph() -> Graph<String> {
    build(true)
}
