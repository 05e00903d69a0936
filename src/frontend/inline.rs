// =============================================================================
// FRONTEND INLINE — Rendu sur une ligne, entre accolades
// =============================================================================
//
//   univers  : { a, b, c }
//   ensemble : { a:(0.7,0.3,0.1), b:(0,0,1) }
//   fonction : { a->1, b->3 }
//
// C'est aussi le rendu des implémentations Display du cœur.
//
// =============================================================================

use crate::core::mapping::Mapping;
use crate::core::set::NeutrosophicSet;
use crate::core::universe::Universe;
use super::Renderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct InlineRenderer;

impl InlineRenderer {
    pub fn new() -> Self {
        InlineRenderer
    }
}

impl Renderer for InlineRenderer {
    fn render_universe(&self, universe: &Universe) -> String {
        universe.to_string()
    }

    fn render_set(&self, set: &NeutrosophicSet) -> String {
        set.to_string()
    }

    fn render_mapping(&self, mapping: &Mapping) -> String {
        mapping.to_string()
    }

    fn name(&self) -> &str {
        "inline"
    }
}
