// =============================================================================
// ERROR — Hiérarchie d'erreurs de la bibliothèque
// =============================================================================
//
// Toutes les opérations échouent immédiatement au point de violation :
// aucune coercition silencieuse, aucune mutation partielle. La validation
// a toujours lieu AVANT l'écriture de l'état.
//
// =============================================================================

use thiserror::Error;

/// Erreur racine de toutes les opérations sur univers, ensembles et fonctions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NsError {
    /// Aucun élément fourni pour construire un univers.
    #[error("empty input: a universe needs at least one element")]
    EmptyInput,

    /// Deux étiquettes coïncident (après conversion en chaîne).
    #[error("duplicate element '{label}' in {role}")]
    DuplicateElement { label: String, role: &'static str },

    /// Étiquette absente de l'univers / du domaine / du codomaine.
    #[error("unknown element '{label}' in {role}")]
    UnknownElement { label: String, role: &'static str },

    /// Un degré (μ, σ ou ω) hors de [0,1]. L'étiquette est absente quand
    /// le triplet est validé avant d'être rattaché à un élément.
    #[error("{degree}{} must lie in [0, 1], got {value}", of_label(.label))]
    DegreeRange {
        label: Option<String>,
        degree: &'static str,
        value: f64,
    },

    /// Opération binaire entre ensembles définis sur des univers différents.
    #[error("universe mismatch in {operation}: {left} vs {right}")]
    UniverseMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },

    /// Le nombre de valeurs ne correspond pas au cardinal attendu.
    #[error("expected {expected} values, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// Une valeur n'appartient pas au codomaine déclaré.
    #[error("value '{value}' does not belong to the codomain {codomain}")]
    CodomainViolation { value: String, codomain: String },

    /// Le domaine déduit d'une association diffère du domaine déclaré.
    #[error("domain mismatch: declared {declared}, inferred {inferred}")]
    DomainMismatch { declared: String, inferred: String },

    /// Élément du domaine sans valeur (fonction construite incrémentalement).
    #[error("element '{label}' has no assigned value")]
    UnassignedValue { label: String },

    /// Texte illisible pour le parseur du front-end.
    #[error("malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    /// Configuration invalide.
    #[error("config error: {0}")]
    Config(String),
}

pub type NsResult<T> = Result<T, NsError>;

fn of_label(label: &Option<String>) -> String {
    match label {
        Some(l) => format!(" of '{}'", l),
        None => String::new(),
    }
}

impl NsError {
    pub(crate) fn unknown(label: &str, role: &'static str) -> Self {
        NsError::UnknownElement {
            label: label.to_string(),
            role,
        }
    }

    /// Rattache une erreur de degré à l'élément concerné.
    pub(crate) fn at(self, element: &str) -> Self {
        match self {
            NsError::DegreeRange { degree, value, .. } => NsError::DegreeRange {
                label: Some(element.to_string()),
                degree,
                value,
            },
            other => other,
        }
    }

    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        NsError::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
