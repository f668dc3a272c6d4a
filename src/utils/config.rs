// Module de chargement des topologies prédéfinies au format TOML

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::topology::Network;
use crate::error::{AppError, Result};

/// Chemin de la topologie par défaut livrée avec le simulateur
pub const DEFAULT_TOPOLOGY_PATH: &str = "conf/default_topology.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub from: String,
    pub to: String,
    pub cost: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TopologyConfig {
    #[serde(default)]
    pub routers: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

impl TopologyConfig {
    /// Construit un réseau neuf à partir de la configuration
    pub fn build_network(&self) -> Network {
        let mut network = Network::new();
        for name in &self.routers {
            network.add_router(name);
        }
        for link in &self.links {
            network.add_link(&link.from, &link.to, link.cost);
        }
        network
    }
}

/// Lit une topologie depuis un fichier TOML
pub fn load_topology(path: &str) -> Result<TopologyConfig> {
    if !Path::new(path).exists() {
        return Err(AppError::ConfigError(format!(
            "Topology file not found: {}",
            path
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigError(format!("Failed to read topology file {}: {}", path, e)))?;

    let config: TopologyConfig = toml::from_str(&content)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse topology file {}: {}", path, e)))?;

    log::info!("Topologie chargée depuis {}", path);
    log::debug!("Topologie: {:?}", config);

    Ok(config)
}

/// Topologie d'exemple à six routeurs, chaque paire reliée dans les deux sens
pub fn default_topology() -> TopologyConfig {
    let pairs = [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
        ("D", "F", 6),
        ("E", "F", 3),
    ];

    let mut links = Vec::new();
    for (from, to, cost) in pairs {
        links.push(LinkConfig {
            from: from.to_string(),
            to: to.to_string(),
            cost,
        });
        links.push(LinkConfig {
            from: to.to_string(),
            to: from.to_string(),
            cost,
        });
    }

    TopologyConfig {
        routers: ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
        links,
    }
}
