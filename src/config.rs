// =============================================================================
// CONFIG — Paramètres d'affichage
// =============================================================================
//
// Seul le front-end d'affichage est configurable : le cœur algébrique n'a
// aucun paramètre (les règles min / max / 1-x sont fixes).
//
// Chargement : `NsConfig::load()` lit le fichier JSON indiqué par la
// variable d'environnement SVNS_CONFIG, sinon les valeurs par défaut.
//
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{NsError, NsResult};

/// Variable d'environnement contenant le chemin du fichier de configuration.
pub const CONFIG_ENV_VAR: &str = "SVNS_CONFIG";

/// Configuration globale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NsConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Largeurs de colonnes et précision du rendu tabulaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Largeur de la colonne des éléments
    pub label_width: usize,
    /// Largeur de chaque colonne de degré
    pub degree_width: usize,
    /// Nombre de décimales affichées pour les degrés
    pub precision: usize,
    /// Largeur des colonnes domaine / codomaine du tableau d'une fonction
    pub mapping_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label_width: 10,
            degree_width: 14,
            precision: 4,
            mapping_width: 28,
        }
    }
}

impl NsConfig {
    /// Parse une configuration JSON puis la valide.
    pub fn from_json(text: &str) -> NsResult<Self> {
        let config: NsConfig =
            serde_json::from_str(text).map_err(|e| NsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Charge la configuration depuis SVNS_CONFIG, ou les valeurs par défaut.
    pub fn load() -> NsResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| NsError::Config(format!("cannot read '{}': {}", path, e)))?;
                tracing::debug!(path = %path, "loading display configuration");
                Self::from_json(&text)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> NsResult<()> {
        let d = &self.display;
        for (name, width) in [
            ("label_width", d.label_width),
            ("degree_width", d.degree_width),
            ("mapping_width", d.mapping_width),
        ] {
            if width == 0 {
                return Err(NsError::Config(format!("{} must be > 0", name)));
            }
        }
        if d.precision > 12 {
            return Err(NsError::Config(format!(
                "precision must be <= 12, got {}",
                d.precision
            )));
        }
        Ok(())
    }
}
