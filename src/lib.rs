// Interface de la bibliothèque du simulateur, exportant le moteur de routage
// et ses types pour les couches de présentation (CLI, tests).

pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::core::topology::Network;
pub use crate::error::{AppError, Result};
pub use crate::types::{Algorithm, PathResult, RouteEntry, RouteState};
