// Tests d'intégration: accord entre les deux algorithmes, mises à jour
// globales des tables et chargement des topologies prédéfinies.

use routing_simulator::core::topology::Network;
use routing_simulator::types::{Algorithm, PathResult, RouteState, TopologyDescription};
use routing_simulator::utils::config;

const DEFAULT_ROUTERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Somme des coûts des liens le long d'un chemin
fn path_cost(network: &Network, path: &[String]) -> i64 {
    path.windows(2)
        .map(|pair| network.neighbors(&pair[0]).unwrap()[&pair[1]])
        .sum()
}

#[test]
fn algorithms_agree_on_graphs_without_negative_edges() {
    for source in DEFAULT_ROUTERS {
        let mut with_dijkstra = config::default_topology().build_network();
        let mut with_bellman_ford = config::default_topology().build_network();

        let dijkstra_paths = match with_dijkstra.dijkstra(source) {
            PathResult::Paths(paths) => paths,
            other => panic!("échec Dijkstra depuis {}: {:?}", source, other),
        };
        let bellman_paths = match with_bellman_ford.bellman_ford(source) {
            PathResult::Paths(paths) => paths,
            other => panic!("échec Bellman-Ford depuis {}: {:?}", source, other),
        };

        for dest in DEFAULT_ROUTERS {
            let dijkstra_entry = with_dijkstra
                .router(source)
                .unwrap()
                .routing_table()
                .get(dest)
                .unwrap()
                .clone();
            let bellman_entry = with_bellman_ford
                .router(source)
                .unwrap()
                .routing_table()
                .get(dest)
                .unwrap()
                .clone();

            assert_eq!(
                dijkstra_entry.state, bellman_entry.state,
                "coût divergent de {} vers {}",
                source, dest
            );

            // Chaque chemin retourné doit coûter exactement le coût inscrit en table
            if let RouteState::Active(cost) = dijkstra_entry.state {
                assert_eq!(path_cost(&with_dijkstra, &dijkstra_paths[dest]), cost);
                assert_eq!(path_cost(&with_bellman_ford, &bellman_paths[dest]), cost);
            }
        }
    }
}

#[test]
fn update_all_dijkstra_rewrites_every_table() {
    let mut network = config::default_topology().build_network();
    assert!(network.update_all_routing_tables(Algorithm::Dijkstra));

    for name in DEFAULT_ROUTERS {
        let table = network.router(name).unwrap().routing_table();
        assert_eq!(table.entries().len(), DEFAULT_ROUTERS.len());
    }

    let a_to_f = network.router("A").unwrap().routing_table().get("F").unwrap();
    assert_eq!(a_to_f.next_hop.as_deref(), Some("C"));
    assert_eq!(a_to_f.state, RouteState::Active(13));

    let f_to_a = network.router("F").unwrap().routing_table().get("A").unwrap();
    assert_eq!(f_to_a.next_hop.as_deref(), Some("E"));
    assert_eq!(f_to_a.state, RouteState::Active(13));
}

#[test]
fn update_all_dijkstra_short_circuits_on_negative_edge() {
    let mut network = config::default_topology().build_network();
    assert!(network.add_link("A", "B", -1));

    assert!(!network.update_all_routing_tables(Algorithm::Dijkstra));

    // Aucune table n'a été touchée: le contrôle a lieu avant le lot
    for name in DEFAULT_ROUTERS {
        let table = network.router(name).unwrap().routing_table();
        assert_eq!(table.entries().len(), 1);
    }
}

#[test]
fn update_all_bellman_ford_fails_on_negative_cycle() {
    let mut network = Network::new();
    for name in ["A", "B", "C"] {
        network.add_router(name);
    }
    network.add_link("A", "B", 1);
    network.add_link("B", "C", -3);
    network.add_link("C", "A", 1);

    assert!(!network.update_all_routing_tables(Algorithm::BellmanFord));
}

#[test]
fn update_all_bellman_ford_succeeds_with_negative_edge() {
    let mut network = Network::new();
    for name in ["A", "B", "C"] {
        network.add_router(name);
    }
    network.add_link("A", "B", 4);
    network.add_link("A", "C", 2);
    network.add_link("C", "B", -3);

    assert!(network.update_all_routing_tables(Algorithm::BellmanFord));

    let a_to_b = network.router("A").unwrap().routing_table().get("B").unwrap();
    assert_eq!(a_to_b.next_hop.as_deref(), Some("C"));
    assert_eq!(a_to_b.state, RouteState::Active(-1));
}

#[test]
fn empty_network_batch_updates_are_trivially_successful() {
    let mut network = Network::new();
    assert!(network.update_all_routing_tables(Algorithm::Dijkstra));
    assert!(network.update_all_routing_tables(Algorithm::BellmanFord));
    assert!(network.routing_tables_str().is_empty());
}

#[test]
fn disconnected_router_renders_as_unreachable() {
    let mut network = Network::new();
    for name in ["A", "B", "E"] {
        network.add_router(name);
    }
    network.add_link("A", "B", 1);
    network.dijkstra("A");

    let rendered = network.routing_tables_str();
    assert!(rendered.contains("E           | N/A      | inf"));
    assert_eq!(rendered, network.routing_tables_str());
}

#[test]
fn removed_router_disappears_from_tables_and_description() {
    let mut network = config::default_topology().build_network();
    assert!(network.update_all_routing_tables(Algorithm::Dijkstra));

    assert!(network.remove_router("F"));

    for name in ["A", "B", "C", "D", "E"] {
        let table = network.router(name).unwrap().routing_table();
        assert!(table.get("F").is_none());
    }

    let description = network.describe();
    assert!(!description.routers.contains(&"F".to_string()));
    assert!(description
        .links
        .iter()
        .all(|link| link.from != "F" && link.to != "F"));
}

#[test]
fn preset_file_matches_builtin_default() {
    let loaded = config::load_topology(config::DEFAULT_TOPOLOGY_PATH)
        .expect("la topologie par défaut doit se charger");
    assert_eq!(loaded, config::default_topology());

    let network = loaded.build_network();
    assert_eq!(network.router_count(), 6);
    assert_eq!(network.links().len(), 18);
}

#[test]
fn topology_description_round_trips_through_json() {
    let network = config::default_topology().build_network();
    let description = network.describe();

    let serialized = serde_json::to_string(&description).unwrap();
    let deserialized: TopologyDescription = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, description);
}
