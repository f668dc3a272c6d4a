// Interface interactive du simulateur de routage.
// Couche de présentation: normalise les saisies (espaces, casse, coût entier)
// avant de les transmettre au moteur, et met en forme les résultats.

use std::io::{self, Write};

use log::info;

use routing_simulator::core::topology::Network;
use routing_simulator::error::Result;
use routing_simulator::types::{Algorithm, PathResult};
use routing_simulator::utils::config;

fn help() {
    println!("\n--- Menu ---");
    println!("  [1] Ajouter un routeur");
    println!("  [2] Ajouter un lien (orienté)");
    println!("  [3] Supprimer un routeur");
    println!("  [4] Supprimer un lien (orienté)");
    println!("  [5] Plus court chemin (Dijkstra)");
    println!("  [6] Plus court chemin (Bellman-Ford)");
    println!("  [7] Calculer toutes les tables (Dijkstra)");
    println!("  [8] Calculer toutes les tables (Bellman-Ford)");
    println!("  [9] Afficher les tables de routage");
    println!("  [topology] Afficher la topologie");
    println!("  [json] Exporter la topologie en JSON");
    println!("  [load] Charger la topologie par défaut");
    println!("  [reset] Réinitialiser le réseau");
    println!("  [menu] Afficher ce menu");
    println!("  [exit] Quitter");
}

/// Affiche l'invite puis lit une ligne sur l'entrée standard
fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Lit un nom de routeur: espaces retirés, casse normalisée en majuscules
fn prompt_name(label: &str) -> io::Result<String> {
    Ok(prompt(label)?.to_uppercase())
}

fn add_router(network: &mut Network) -> io::Result<()> {
    let name = prompt_name("Nom du routeur: ")?;
    if name.is_empty() {
        println!("ERREUR: le nom ne peut pas être vide.");
    } else if network.add_router(&name) {
        println!("Routeur {} ajouté.", name);
    } else {
        println!("ERREUR: le routeur {} existe déjà.", name);
    }
    Ok(())
}

fn remove_router(network: &mut Network) -> io::Result<()> {
    let name = prompt_name("Nom du routeur à supprimer: ")?;
    if network.remove_router(&name) {
        println!("Routeur {} et ses liens supprimés.", name);
    } else {
        println!("ERREUR: routeur {} introuvable.", name);
    }
    Ok(())
}

fn add_link(network: &mut Network) -> io::Result<()> {
    let from = prompt_name("Routeur source: ")?;
    let to = prompt_name("Routeur destination: ")?;
    let raw_cost = prompt(&format!("Coût du lien {} -> {}: ", from, to))?;
    match raw_cost.parse::<i64>() {
        Ok(cost) => {
            if network.add_link(&from, &to, cost) {
                println!("Lien {} -> {} ajouté avec un coût de {}.", from, to, cost);
            } else {
                println!("ERREUR: un des deux routeurs n'existe pas.");
            }
        }
        Err(_) => println!("ERREUR: le coût '{}' n'est pas un entier valide.", raw_cost),
    }
    Ok(())
}

fn remove_link(network: &mut Network) -> io::Result<()> {
    let from = prompt_name("Routeur source: ")?;
    let to = prompt_name("Routeur destination: ")?;
    if network.remove_link(&from, &to) {
        println!("Lien {} -> {} supprimé.", from, to);
    } else {
        println!("ERREUR: lien {} -> {} introuvable.", from, to);
    }
    Ok(())
}

/// Interroge un algorithme pour un couple source/destination et affiche
/// le chemin et son coût, en distinguant l'absence de chemin d'un refus
fn find_path(network: &mut Network, algorithm: Algorithm) -> io::Result<()> {
    let start = prompt_name("Routeur de départ: ")?;
    let end = prompt_name("Routeur d'arrivée: ")?;
    if start.is_empty() || end.is_empty() {
        println!("ERREUR: les noms de départ et d'arrivée ne peuvent pas être vides.");
        return Ok(());
    }

    let result = match algorithm {
        Algorithm::Dijkstra => network.dijkstra(&start),
        Algorithm::BellmanFord => network.bellman_ford(&start),
    };

    match result {
        PathResult::Paths(paths) => match paths.get(&end).filter(|path| !path.is_empty()) {
            Some(path) => {
                let cost = network
                    .router(&start)
                    .and_then(|router| router.routing_table().get(&end))
                    .map(|entry| entry.state.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                println!("  Chemin: {}", path.join(" -> "));
                println!("  Coût: {}", cost);
            }
            None => println!("ERREUR: aucun chemin de {} vers {}.", start, end),
        },
        PathResult::SourceNotFound => println!("ERREUR: routeur {} introuvable.", start),
        PathResult::NegativeEdgesPresent => {
            println!("ERREUR: Dijkstra est inutilisable avec des coûts négatifs.")
        }
        PathResult::NegativeCycleDetected => {
            println!("ERREUR: calcul impossible, cycle de coût négatif détecté.")
        }
    }
    Ok(())
}

fn show_topology(network: &Network) {
    let description = network.describe();
    if description.routers.is_empty() {
        println!("Le réseau est vide.");
        return;
    }
    println!("Routeurs: {}", description.routers.join(", "));
    for link in &description.links {
        println!("  {} -> {} (coût {})", link.from, link.to, link.cost);
    }
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    println!("--- Simulateur de protocole de routage ---");
    println!("Les liens sont orientés: ajoutez A->B puis B->A pour un lien bidirectionnel.");
    help();

    let mut network = Network::new();
    info!("Simulateur démarré avec un réseau vide");

    loop {
        let choice = prompt("\n> ")?.to_lowercase();

        match choice.as_str() {
            "exit" => {
                println!("Au revoir!");
                break;
            }
            "menu" | "help" => help(),
            "1" => add_router(&mut network)?,
            "2" => add_link(&mut network)?,
            "3" => remove_router(&mut network)?,
            "4" => remove_link(&mut network)?,
            "5" => find_path(&mut network, Algorithm::Dijkstra)?,
            "6" => find_path(&mut network, Algorithm::BellmanFord)?,
            "7" => {
                if network.update_all_routing_tables(Algorithm::Dijkstra) {
                    println!("Tables calculées avec Dijkstra. Entrez '9' pour les afficher.");
                } else {
                    println!("ERREUR: échec du calcul Dijkstra (coûts négatifs présents).");
                }
            }
            "8" => {
                if network.update_all_routing_tables(Algorithm::BellmanFord) {
                    println!("Tables calculées avec Bellman-Ford. Entrez '9' pour les afficher.");
                } else {
                    println!("ERREUR: échec du calcul Bellman-Ford (cycle de coût négatif).");
                }
            }
            "9" => {
                let tables = network.routing_tables_str();
                if tables.is_empty() {
                    println!("Aucune table: le réseau est vide.");
                } else {
                    println!("{}", tables);
                }
            }
            "topology" => show_topology(&network),
            "json" => {
                let description = network.describe();
                println!("{}", serde_json::to_string_pretty(&description)?);
            }
            "load" => match config::load_topology(config::DEFAULT_TOPOLOGY_PATH) {
                Ok(topology) => {
                    network = topology.build_network();
                    println!(
                        "Topologie par défaut chargée ({} routeurs).",
                        network.router_count()
                    );
                }
                Err(e) => println!("ERREUR: {}", e),
            },
            "reset" => {
                network = Network::new();
                println!("Réseau réinitialisé.");
            }
            "" => {}
            other => println!("ERREUR: commande inconnue '{}'. Entrez 'menu' pour les options.", other),
        }
    }

    Ok(())
}
