// Table de routage par routeur, dérivée des calculs de plus courts chemins

use std::collections::HashMap;

use crate::core::ComputedRoutes;
use crate::types::{RouteEntry, RouteState};

/// Table de routage d'un routeur: destination vers (prochain saut, coût)
#[derive(Debug, Clone)]
pub struct RoutingTable {
    routes: HashMap<String, RouteEntry>,
}

impl RoutingTable {
    /// Crée une table ne contenant que l'entrée vers soi-même
    pub fn new_for(owner: &str) -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            owner.to_string(),
            RouteEntry {
                next_hop: Some(owner.to_string()),
                state: RouteState::Active(0),
            },
        );
        RoutingTable { routes }
    }

    /// Réécrit entièrement la table à partir d'un résultat de calcul.
    /// Le prochain saut est le deuxième nœud du chemin complet depuis la
    /// source, ou la source elle-même pour l'entrée vers soi.
    pub fn rebuild_from(&mut self, source: &str, destinations: &[String], computed: &ComputedRoutes) {
        self.routes.clear();
        for dest in destinations {
            let entry = match (computed.costs.get(dest), computed.paths.get(dest)) {
                (Some(&cost), Some(path)) if !path.is_empty() => {
                    let next_hop = if path.len() > 1 {
                        path[1].clone()
                    } else {
                        source.to_string()
                    };
                    RouteEntry {
                        next_hop: Some(next_hop),
                        state: RouteState::Active(cost),
                    }
                }
                _ => RouteEntry {
                    next_hop: None,
                    state: RouteState::Unreachable,
                },
            };
            self.routes.insert(dest.clone(), entry);
        }
    }

    pub fn get(&self, destination: &str) -> Option<&RouteEntry> {
        self.routes.get(destination)
    }

    /// Retire une destination de la table (routeur supprimé de la topologie)
    pub fn remove_destination(&mut self, destination: &str) {
        self.routes.remove(destination);
    }

    pub fn entries(&self) -> &HashMap<String, RouteEntry> {
        &self.routes
    }

    /// Rendu textuel de la table, destinations triées pour une sortie stable
    pub fn format_block(&self, owner: &str) -> String {
        let mut output = format!("\n======= Router: {} =======\n", owner);
        output.push_str("Destination | Next Hop | Cost\n");
        output.push_str("---------------------------------\n");

        let mut destinations: Vec<&String> = self.routes.keys().collect();
        destinations.sort();
        for dest in destinations {
            let entry = &self.routes[dest];
            let next_hop = entry.next_hop.as_deref().unwrap_or("N/A");
            output.push_str(&format!("{:<12}| {:<9}| {}\n", dest, next_hop, entry.state));
        }
        output
    }
}
