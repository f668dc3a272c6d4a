// Implémentation de l'algorithme de Bellman-Ford
// Relaxation répétée des liens, tolère les coûts négatifs

use std::collections::HashMap;

use log::{debug, warn};

use crate::core::topology::Network;
use crate::core::ComputedRoutes;

/// Calcule les plus courts chemins depuis `source` par relaxation répétée des liens.
/// Retourne `None` si un cycle de coût négatif atteignable depuis la source est détecté.
/// L'appelant garantit que la source existe.
pub fn shortest_paths(network: &Network, source: &str) -> Option<ComputedRoutes> {
    let edges = network.links();
    let router_count = network.router_count();

    let mut costs: HashMap<String, i64> = HashMap::new();
    let mut predecessors: HashMap<String, String> = HashMap::new();
    costs.insert(source.to_string(), 0);

    // Étape 1: relaxation de tous les liens, répétée V-1 fois
    for _ in 1..router_count {
        for (from, to, weight) in &edges {
            if let Some(&from_cost) = costs.get(from) {
                let candidate = from_cost + *weight;
                if costs.get(to).map_or(true, |&to_cost| candidate < to_cost) {
                    costs.insert(to.clone(), candidate);
                    predecessors.insert(to.clone(), from.clone());
                }
            }
        }
    }

    // Étape 2: toute amélioration restante révèle un cycle de coût négatif
    for (from, to, weight) in &edges {
        if let Some(&from_cost) = costs.get(from) {
            if costs
                .get(to)
                .map_or(true, |&to_cost| from_cost + *weight < to_cost)
            {
                warn!(
                    "Cycle de coût négatif détecté via le lien {} -> {}",
                    from, to
                );
                return None;
            }
        }
    }

    // Étape 3: reconstruction des chemins en remontant les prédécesseurs
    let mut computed = ComputedRoutes::default();
    for name in network.router_names() {
        computed.paths.insert(name.clone(), Vec::new());
    }

    for dest in network.router_names() {
        let Some(&cost) = costs.get(dest) else {
            continue;
        };

        let mut path: Vec<String> = Vec::new();
        let mut current = Some(dest.clone());
        while let Some(node) = current {
            if path.contains(&node) {
                // Garde: ne doit pas arriver après le contrôle de cycle,
                // mais la remontée ne doit jamais boucler indéfiniment
                warn!(
                    "Cycle rencontré pendant la reconstruction du chemin vers {}",
                    dest
                );
                path.insert(0, node);
                break;
            }
            path.insert(0, node.clone());
            current = predecessors.get(&node).cloned();
        }

        // Seuls les chemins qui remontent exactement jusqu'à la source sont valides
        if path.first().map(String::as_str) == Some(source) {
            computed.costs.insert(dest.clone(), cost);
            computed.paths.insert(dest.clone(), path);
        }
    }

    debug!(
        "Bellman-Ford depuis {}: {} destinations atteignables",
        source,
        computed.costs.len()
    );
    Some(computed)
}
