// =============================================================================
// FRONTEND TABLE — Rendu tabulaire pour la console
// =============================================================================
//
// Ensemble neutrosophique :
//
//   element    |     membership |  indeterminacy | non-membership
//   ----------------------------------------------------------------
//   a          |         0.7000 |         0.3000 |         0.1000
//
// Fonction (tableau de flèches) :
//
//          { a, b, c }   ->   { 1, 2 }
//   ----------------------------------------------------------------
//                    a  |->  2
//
// Les largeurs et la précision viennent de DisplayConfig.
//
// =============================================================================

use crate::config::DisplayConfig;
use crate::core::mapping::Mapping;
use crate::core::set::NeutrosophicSet;
use crate::core::universe::Universe;
use super::Renderer;

/// Renderer tabulaire configurable.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    config: DisplayConfig,
}

impl TableRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        TableRenderer { config }
    }

    fn degree_row(&self, label: &str, degrees: [String; 3]) -> String {
        let lw = self.config.label_width;
        let dw = self.config.degree_width;
        let [mu, sigma, omega] = degrees;
        format!(
            "{:<lw$} | {:>dw$} | {:>dw$} | {:>dw$}",
            label, mu, sigma, omega
        )
    }
}

impl Renderer for TableRenderer {
    fn render_universe(&self, universe: &Universe) -> String {
        let mut out = format!("{:<w$}\n", "element", w = self.config.label_width);
        out.push_str(&"-".repeat(self.config.label_width));
        out.push('\n');
        for label in universe {
            out.push_str(label);
            out.push('\n');
        }
        out
    }

    fn render_set(&self, set: &NeutrosophicSet) -> String {
        let p = self.config.precision;
        let header = self.degree_row(
            "element",
            [
                "membership".to_string(),
                "indeterminacy".to_string(),
                "non-membership".to_string(),
            ],
        );
        let mut out = format!("{}\n{}\n", header, "-".repeat(header.chars().count()));
        for (label, triple) in set.iter() {
            let (mu, sigma, omega) = triple.as_tuple();
            out.push_str(&self.degree_row(
                label,
                [
                    format!("{:.p$}", mu),
                    format!("{:.p$}", sigma),
                    format!("{:.p$}", omega),
                ],
            ));
            out.push('\n');
        }
        out
    }

    fn render_mapping(&self, mapping: &Mapping) -> String {
        let w = self.config.mapping_width;
        let mut out = format!(
            "{:>w$}   ->   {:<w$}\n",
            mapping.domain().to_string(),
            mapping.codomain().to_string(),
        );
        out.push_str(&"-".repeat(w * 2 + 8));
        out.push('\n');
        for (u, v) in mapping.associations() {
            out.push_str(&format!("{:>w$}  |->  {:<w$}\n", u, v.unwrap_or("?")));
        }
        out
    }

    fn name(&self) -> &str {
        "table"
    }
}
