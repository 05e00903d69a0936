// =============================================================================
// FRONTEND — Les collaborateurs textuels du cœur
// =============================================================================
//
// Deux sens de traduction :
//   - text   : texte libre → arguments des constructeurs (parseur)
//   - Renderer : données → chaîne d'affichage (inline, table)
//
// Le cœur (module core) ne connaît JAMAIS le front-end. L'affichage est
// purement présentationnel : il ne sert ni à l'égalité, ni à la
// persistance.
//
// =============================================================================

pub mod text;
pub mod inline;
pub mod table;

use crate::core::mapping::Mapping;
use crate::core::set::NeutrosophicSet;
use crate::core::universe::Universe;

pub use inline::InlineRenderer;
pub use table::TableRenderer;

/// Trait commun des mises en forme.
///
/// Chaque renderer traduit les trois structures du cœur en texte.
pub trait Renderer {
    fn render_universe(&self, universe: &Universe) -> String;

    /// Un ensemble : une entrée (élément, μ, σ, ω) par élément de l'univers
    fn render_set(&self, set: &NeutrosophicSet) -> String;

    /// Une fonction : une flèche u → f(u) par élément du domaine
    fn render_mapping(&self, mapping: &Mapping) -> String;

    /// Nom du renderer
    fn name(&self) -> &str;
}
