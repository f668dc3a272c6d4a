// Module cœur: topologie, algorithmes de plus courts chemins et tables de routage

pub mod bellman_ford;
pub mod dijkstra;
pub mod routing_table;
pub mod topology;

use std::collections::HashMap;

/// Résultat brut d'un calcul de plus courts chemins, avant application
/// à la table de routage du routeur source.
#[derive(Debug, Clone, Default)]
pub struct ComputedRoutes {
    /// Coût total par destination atteignable
    pub costs: HashMap<String, i64>,
    /// Chemin ordonné depuis la source; vide si la destination est inatteignable
    pub paths: HashMap<String, Vec<String>>,
}
