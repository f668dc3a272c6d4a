// Utilitaires: chargement des topologies prédéfinies

pub mod config;
