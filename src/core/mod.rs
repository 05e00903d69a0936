// =============================================================================
// CORE — Le cœur algébrique pur
// =============================================================================
//
// Ce module regroupe toute la logique mathématique :
// pas de parseur, pas de mise en forme — uniquement des univers, des
// ensembles neutrosophiques et des fonctions entre univers.
//
// Architecture (des feuilles vers le haut) :
//   degree    → le triplet (μ, σ, ω) et ses règles point par point
//   validate  → les vérifications partagées (degrés, univers)
//   universe  → la suite ordonnée d'étiquettes uniques
//   set       → l'ensemble neutrosophique et ses opérations
//   mapping   → la fonction entre deux univers, ses fibres
//   migrate   → image et contre-image le long d'une fonction
//
// =============================================================================

pub mod degree;
pub mod validate;
pub mod universe;
pub mod set;
pub mod mapping;
pub mod migrate;
