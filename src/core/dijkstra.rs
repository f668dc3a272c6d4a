// Implémentation de l'algorithme de Dijkstra
// Calcul des meilleurs chemins basé sur le coût cumulé des liens

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::debug;

use crate::core::topology::Network;
use crate::core::ComputedRoutes;

/// Nœud utilisé dans la file de priorité de Dijkstra
#[derive(Debug, Clone, Eq, PartialEq)]
struct HeapEntry {
    name: String,
    total_cost: i64,
    path: Vec<String>,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ordre inversé sur le coût pour obtenir une file à coût minimum
        other
            .total_cost
            .cmp(&self.total_cost)
            .then_with(|| other.name.cmp(&self.name))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Calcule les plus courts chemins depuis `source` vers tous les routeurs connus.
/// L'appelant garantit que la source existe et qu'aucun lien n'a un coût négatif.
pub fn shortest_paths(network: &Network, source: &str) -> ComputedRoutes {
    let mut computed = ComputedRoutes::default();
    for name in network.router_names() {
        computed.paths.insert(name.clone(), Vec::new());
    }

    let mut best_costs: HashMap<String, i64> = HashMap::new();
    best_costs.insert(source.to_string(), 0);

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry {
        name: source.to_string(),
        total_cost: 0,
        path: vec![source.to_string()],
    });

    while let Some(HeapEntry {
        name,
        total_cost,
        path,
    }) = heap.pop()
    {
        // Entrée périmée: un chemin moins cher a déjà été retenu
        if best_costs.get(&name).is_some_and(|&best| total_cost > best) {
            continue;
        }

        computed.costs.insert(name.clone(), total_cost);
        computed.paths.insert(name.clone(), path.clone());

        if let Some(neighbors) = network.neighbors(&name) {
            for (next, &weight) in neighbors {
                let new_cost = total_cost + weight;
                let is_better = match best_costs.get(next) {
                    Some(&old_cost) => new_cost < old_cost,
                    None => true,
                };
                if is_better {
                    best_costs.insert(next.clone(), new_cost);
                    let mut new_path = path.clone();
                    new_path.push(next.clone());
                    heap.push(HeapEntry {
                        name: next.clone(),
                        total_cost: new_cost,
                        path: new_path,
                    });
                }
            }
        }
    }

    debug!(
        "Dijkstra depuis {}: {} destinations atteignables",
        source,
        computed.costs.len()
    );
    computed
}
