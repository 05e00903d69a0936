// =============================================================================
// VALIDATE — Vérifications partagées, toutes en échec immédiat
// =============================================================================
//
// Ce module regroupe les contrôles utilisés par les autres modules du cœur :
//   - un degré est un réel de [0,1]
//   - deux ensembles sont définis sur le MÊME univers (mêmes étiquettes,
//     même ordre) avant toute opération binaire
//   - une étiquette appartient bien à un univers donné
//
// Aucun contrôle ne modifie d'état : on valide d'abord, on écrit ensuite.
//
// =============================================================================

use crate::error::{NsError, NsResult};
use super::degree::DegreeKind;
use super::universe::Universe;

/// Vérifie qu'un degré est dans [0,1] (NaN refusé).
pub fn check_degree(kind: DegreeKind, value: f64) -> NsResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(NsError::DegreeRange {
            label: None,
            degree: kind.name(),
            value,
        })
    }
}

/// Vérifie que deux univers sont structurellement égaux.
pub fn ensure_same_universe(
    operation: &'static str,
    left: &Universe,
    right: &Universe,
) -> NsResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(NsError::UniverseMismatch {
            operation,
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}

/// Retourne la position de `label` dans `universe`, ou UnknownElement.
pub fn locate(universe: &Universe, label: &str, role: &'static str) -> NsResult<usize> {
    universe
        .position(label)
        .ok_or_else(|| NsError::unknown(label, role))
}
