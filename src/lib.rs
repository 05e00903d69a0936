// =============================================================================
// SVNS — Ensembles neutrosophiques à valeur unique en Rust
// =============================================================================
//
// Svns implémente l'algèbre des ensembles neutrosophiques à valeur unique :
// chaque élément d'un univers fini porte trois degrés indépendants
// (appartenance μ, indétermination σ, non-appartenance ω), tous dans [0,1].
//
// Architecture :
//   core/      → Le cœur algébrique pur (univers, ensembles, fonctions)
//   frontend/  → Parseur de texte libre et mises en forme (inline, table)
//   error      → La hiérarchie d'erreurs (échec immédiat, jamais partiel)
//   config     → Les paramètres d'affichage
//
// Concepts fondamentaux :
//   Universe         = suite ordonnée d'étiquettes uniques
//   NeutrosophicSet  = fonction totale Universe → [0,1]³
//   Mapping          = fonction totale entre deux Universes
//   image, counterimage = transport d'un ensemble le long d'un Mapping
//
// =============================================================================

pub mod core;
pub mod frontend;
pub mod error;
pub mod config;

pub use crate::config::{DisplayConfig, NsConfig};
pub use crate::core::degree::{DegreeKind, Triple};
pub use crate::core::mapping::Mapping;
pub use crate::core::set::NeutrosophicSet;
pub use crate::core::universe::Universe;
pub use crate::error::{NsError, NsResult};
pub use crate::frontend::{InlineRenderer, Renderer, TableRenderer};
