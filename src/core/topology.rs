// Topologie du réseau: routeurs, liens orientés et points d'entrée des algorithmes

use std::collections::HashMap;

use log::{info, warn};

use crate::core::routing_table::RoutingTable;
use crate::core::{bellman_ford, dijkstra, ComputedRoutes};
use crate::types::{Algorithm, LinkDescription, PathResult, TopologyDescription};

/// Représente un routeur du réseau simulé
#[derive(Debug, Clone)]
pub struct Router {
    name: String,
    routing_table: RoutingTable,
}

impl Router {
    fn new(name: &str) -> Self {
        Router {
            name: name.to_string(),
            routing_table: RoutingTable::new_for(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routing_table(&self) -> &RoutingTable {
        &self.routing_table
    }
}

/// Représente le réseau complet: l'ensemble des routeurs et la liste
/// d'adjacence des liens orientés, stockés côté source.
#[derive(Debug, Default)]
pub struct Network {
    routers: HashMap<String, Router>,
    adjacency: HashMap<String, HashMap<String, i64>>,
}

impl Network {
    pub fn new() -> Self {
        Network {
            routers: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Ajoute un routeur au réseau
    pub fn add_router(&mut self, name: &str) -> bool {
        if name.is_empty() {
            warn!("Nom de routeur vide refusé");
            return false;
        }
        if self.routers.contains_key(name) {
            warn!("Le routeur {} existe déjà", name);
            return false;
        }
        self.routers.insert(name.to_string(), Router::new(name));
        self.adjacency.insert(name.to_string(), HashMap::new());
        info!("Routeur {} ajouté", name);
        true
    }

    /// Supprime un routeur ainsi que tous les liens dont il est une extrémité
    pub fn remove_router(&mut self, name: &str) -> bool {
        if self.routers.remove(name).is_none() {
            warn!("Routeur {} introuvable", name);
            return false;
        }
        self.adjacency.remove(name);

        // Les liens sont stockés côté source: balayage explicite des liens entrants
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(name);
        }

        // Les tables restantes ne doivent plus exposer cette destination
        for router in self.routers.values_mut() {
            router.routing_table.remove_destination(name);
        }

        info!("Routeur {} et ses liens supprimés", name);
        true
    }

    /// Ajoute un lien orienté de `from` vers `to`, en remplaçant le coût
    /// si le lien existe déjà. Le lien inverse n'est jamais créé implicitement.
    pub fn add_link(&mut self, from: &str, to: &str, cost: i64) -> bool {
        if !self.routers.contains_key(from) || !self.routers.contains_key(to) {
            warn!("Lien {} -> {} refusé: routeur inconnu", from, to);
            return false;
        }
        if cost < 0 {
            warn!(
                "Coût négatif ({}) pour le lien {} -> {}: Dijkstra refusera ce graphe",
                cost, from, to
            );
        }
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.insert(to.to_string(), cost);
        }
        info!("Lien ajouté de {} -> {} avec un coût de {}", from, to, cost);
        true
    }

    /// Supprime le lien orienté de `from` vers `to`
    pub fn remove_link(&mut self, from: &str, to: &str) -> bool {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            if neighbors.remove(to).is_some() {
                info!("Lien supprimé de {} -> {}", from, to);
                return true;
            }
        }
        warn!("Lien {} -> {} introuvable", from, to);
        false
    }

    pub fn router(&self, name: &str) -> Option<&Router> {
        self.routers.get(name)
    }

    pub fn router_names(&self) -> impl Iterator<Item = &String> {
        self.routers.keys()
    }

    pub fn router_count(&self) -> usize {
        self.routers.len()
    }

    /// Voisins sortants d'un routeur avec le coût de chaque lien
    pub fn neighbors(&self, name: &str) -> Option<&HashMap<String, i64>> {
        self.adjacency.get(name)
    }

    /// Tous les liens orientés sous forme (source, destination, coût)
    pub fn links(&self) -> Vec<(String, String, i64)> {
        let mut links = Vec::new();
        for (from, neighbors) in &self.adjacency {
            for (to, &cost) in neighbors {
                links.push((from.clone(), to.clone(), cost));
            }
        }
        links
    }

    /// Vérifie si le graphe contient au moins un lien à coût négatif
    pub fn has_negative_edges(&self) -> bool {
        self.adjacency
            .values()
            .any(|neighbors| neighbors.values().any(|&cost| cost < 0))
    }

    /// Plus courts chemins depuis `source` avec Dijkstra.
    /// Refuse tout graphe contenant un lien à coût négatif, même hors de
    /// portée de la source. En cas de succès, la table de routage de la
    /// source est entièrement réécrite.
    pub fn dijkstra(&mut self, source: &str) -> PathResult {
        if !self.routers.contains_key(source) {
            warn!("Routeur {} introuvable", source);
            return PathResult::SourceNotFound;
        }
        if self.has_negative_edges() {
            warn!("Dijkstra ne peut pas s'exécuter avec des coûts négatifs");
            return PathResult::NegativeEdgesPresent;
        }

        let computed = dijkstra::shortest_paths(self, source);
        self.apply_routes(source, &computed);
        PathResult::Paths(computed.paths)
    }

    /// Plus courts chemins depuis `source` avec Bellman-Ford.
    /// Échoue si un cycle de coût négatif atteignable est détecté; la table
    /// de la source n'est alors pas modifiée.
    pub fn bellman_ford(&mut self, source: &str) -> PathResult {
        if !self.routers.contains_key(source) {
            warn!("Routeur {} introuvable", source);
            return PathResult::SourceNotFound;
        }

        match bellman_ford::shortest_paths(self, source) {
            Some(computed) => {
                self.apply_routes(source, &computed);
                PathResult::Paths(computed.paths)
            }
            None => PathResult::NegativeCycleDetected,
        }
    }

    /// Applique un résultat de calcul à la table de routage du routeur source
    fn apply_routes(&mut self, source: &str, computed: &ComputedRoutes) {
        let destinations: Vec<String> = self.routers.keys().cloned().collect();
        if let Some(router) = self.routers.get_mut(source) {
            router.routing_table.rebuild_from(source, &destinations, computed);
        }
    }

    /// Recalcule les tables de routage de tous les routeurs avec l'algorithme choisi
    pub fn update_all_routing_tables(&mut self, algorithm: Algorithm) -> bool {
        match algorithm {
            Algorithm::Dijkstra => self.update_all_routing_tables_dijkstra(),
            Algorithm::BellmanFord => self.update_all_routing_tables_bellman_ford(),
        }
    }

    /// Recalcule toutes les tables avec Dijkstra.
    /// Un seul contrôle des coûts négatifs court-circuite tout le lot.
    pub fn update_all_routing_tables_dijkstra(&mut self) -> bool {
        if self.has_negative_edges() {
            warn!("Mise à jour Dijkstra abandonnée: coûts négatifs présents");
            return false;
        }

        let sources: Vec<String> = self.routers.keys().cloned().collect();
        for source in sources {
            self.dijkstra(&source);
        }
        info!(
            "Tables de routage mises à jour avec Dijkstra pour {} routeurs",
            self.routers.len()
        );
        true
    }

    /// Recalcule toutes les tables avec Bellman-Ford.
    /// S'arrête à la première source qui détecte un cycle négatif; les tables
    /// déjà recalculées restent en place.
    pub fn update_all_routing_tables_bellman_ford(&mut self) -> bool {
        let sources: Vec<String> = self.routers.keys().cloned().collect();
        for source in sources {
            if matches!(
                self.bellman_ford(&source),
                PathResult::NegativeCycleDetected
            ) {
                warn!(
                    "Mise à jour Bellman-Ford interrompue: cycle négatif depuis {}",
                    source
                );
                return false;
            }
        }
        info!(
            "Tables de routage mises à jour avec Bellman-Ford pour {} routeurs",
            self.routers.len()
        );
        true
    }

    /// Description structurée de la topologie, triée pour un rendu stable
    pub fn describe(&self) -> TopologyDescription {
        let mut routers: Vec<String> = self.routers.keys().cloned().collect();
        routers.sort();

        let mut links: Vec<LinkDescription> = self
            .links()
            .into_iter()
            .map(|(from, to, cost)| LinkDescription { from, to, cost })
            .collect();
        links.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));

        TopologyDescription { routers, links }
    }

    /// Rendu textuel déterministe de toutes les tables de routage,
    /// routeurs et destinations triés par ordre lexicographique
    pub fn routing_tables_str(&self) -> String {
        let mut output = String::new();
        let mut names: Vec<&String> = self.routers.keys().collect();
        names.sort();
        for name in names {
            output.push_str(&self.routers[name].routing_table.format_block(name));
        }
        output
    }
}
