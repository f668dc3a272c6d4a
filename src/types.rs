// Définitions des structures et enums partagées

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// État d'une route dans la table de routage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteState {
    /// Route active avec le coût total du chemin
    Active(i64),
    /// Destination inaccessible (coût infini)
    Unreachable,
}

impl fmt::Display for RouteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteState::Active(cost) => write!(f, "{}", cost),
            RouteState::Unreachable => write!(f, "inf"),
        }
    }
}

/// Entrée de la table de routage: prochain saut et état de la route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub next_hop: Option<String>,
    pub state: RouteState,
}

/// Algorithme de calcul des plus courts chemins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

/// Résultat d'un calcul de plus courts chemins depuis un routeur source.
/// Chaque issue est une variante distincte pour que l'appelant puisse
/// différencier "pas de chemin" d'un refus de l'algorithme.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    /// Chemins calculés: chaque routeur connu vers son chemin ordonné
    /// depuis la source (vide si inatteignable)
    Paths(HashMap<String, Vec<String>>),
    /// Le routeur source n'existe pas dans la topologie
    SourceNotFound,
    /// Au moins un lien du graphe a un coût négatif (refus de Dijkstra)
    NegativeEdgesPresent,
    /// Un cycle de coût négatif atteignable a été détecté (échec de Bellman-Ford)
    NegativeCycleDetected,
}

impl PathResult {
    /// Accès aux chemins calculés, si le calcul a abouti
    pub fn paths(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            PathResult::Paths(paths) => Some(paths),
            _ => None,
        }
    }
}

/// Lien orienté tel qu'exposé dans la description de topologie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescription {
    pub from: String,
    pub to: String,
    pub cost: i64,
}

/// Description structurée de la topologie courante, destinée au rendu externe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyDescription {
    pub routers: Vec<String>,
    pub links: Vec<LinkDescription>,
}
