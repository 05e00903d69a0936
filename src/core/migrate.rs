// =============================================================================
// MIGRATE — Image et contre-image d'un ensemble neutrosophique
// =============================================================================
//
// Étant donné un Mapping f : X → Y, on transporte les ensembles
// neutrosophiques dans les DEUX directions :
//
// ┌─────────────────────────────────────────────────────────────────────┐
// │                                                                     │
// │  f⁻¹ (contre-image / pullback)                                      │
// │  Prend un ensemble sur Y, produit un ensemble sur X                 │
// │  f⁻¹(B)(u) = B(f(u))                                                │
// │  Aucune agrégation : f choisit déjà un seul élément par u.          │
// │                                                                     │
// │  f  (image / pushforward)                                           │
// │  Prend un ensemble sur X, produit un ensemble sur Y                 │
// │  Pour chaque v ∈ Y, on agrège sur la fibre F = f⁻¹({v}) :           │
// │    f(A)(v) = (max μ, max σ, min ω) sur F      si F ≠ ∅              │
// │    f(A)(v) = (1, 1, 0)                        si F = ∅              │
// │                                                                     │
// └─────────────────────────────────────────────────────────────────────┘
//
// FIBRE VIDE : le triplet ABSOLU (1,1,0), et non le vide (0,0,1). Sans
// antécédent, la contrainte d'inclusion est satisfaite au maximum. Cette
// convention est conservée telle quelle.
//
// PROPRIÉTÉ : A ⊆ f⁻¹(f(A)) pour tout A sur X.
//
// =============================================================================

use tracing::debug;

use crate::error::NsResult;
use super::degree::Triple;
use super::mapping::Mapping;
use super::set::NeutrosophicSet;
use super::validate::ensure_same_universe;

/// Image f(A) d'un ensemble défini sur le domaine.
///
/// ALGORITHME :
///   1. Construire la table inverse : pour chaque v du codomaine, sa fibre
///   2. Fibre vide → (1,1,0), sinon agrégation (max, max, min)
pub fn image(mapping: &Mapping, set: &NeutrosophicSet) -> NsResult<NeutrosophicSet> {
    ensure_same_universe("image", mapping.domain(), set.universe())?;
    let values = mapping.value_indices()?;

    // fibres[j] = triplets des éléments envoyés sur le j-ème élément du codomaine
    let mut fibres: Vec<Vec<Triple>> = vec![Vec::new(); mapping.codomain().cardinality()];
    for ((_, triple), j) in set.iter().zip(values) {
        fibres[j].push(triple);
    }

    let mut result = NeutrosophicSet::new(mapping.codomain());
    for (v, fibre) in mapping.codomain().iter().zip(&fibres) {
        let triple = fibre
            .iter()
            .copied()
            .reduce(|acc, t| acc.union(&t))
            .unwrap_or(Triple::ABSOLUTE);
        result.set_triple(v, triple)?;
    }

    debug!(
        domain = %mapping.domain(),
        codomain = %mapping.codomain(),
        empty_fibres = fibres.iter().filter(|f| f.is_empty()).count(),
        "image computed"
    );
    Ok(result)
}

/// Contre-image f⁻¹(B) d'un ensemble défini sur le codomaine.
pub fn counterimage(mapping: &Mapping, set: &NeutrosophicSet) -> NsResult<NeutrosophicSet> {
    ensure_same_universe("counterimage", mapping.codomain(), set.universe())?;
    mapping.ensure_total()?;

    let mut result = NeutrosophicSet::new(mapping.domain());
    for (u, value) in mapping.associations() {
        if let Some(v) = value {
            result.set_triple(u, set.get_element(v)?)?;
        }
    }

    debug!(
        domain = %mapping.domain(),
        codomain = %mapping.codomain(),
        "counterimage computed"
    );
    Ok(result)
}

impl Mapping {
    /// Voir [`image`].
    pub fn image(&self, set: &NeutrosophicSet) -> NsResult<NeutrosophicSet> {
        image(self, set)
    }

    /// Voir [`counterimage`].
    pub fn counterimage(&self, set: &NeutrosophicSet) -> NsResult<NeutrosophicSet> {
        counterimage(self, set)
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::universe::Universe;
    use crate::error::NsError;

    fn abcde() -> Universe {
        Universe::from_labels(["a", "b", "c", "d", "e"]).unwrap()
    }

    fn sample(u: &Universe) -> NeutrosophicSet {
        NeutrosophicSet::with_triples(
            u,
            [
                (0.7, 0.3, 0.1),
                (0.4, 0.6, 0.9),
                (0.0, 0.0, 1.0),
                (0.1, 0.4, 0.5),
                (0.2, 0.2, 0.3),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_image_aggregates_fibres() {
        let v = Universe::from_labels([1, 2, 3, 4]).unwrap();
        let f = Mapping::new(&abcde(), &v, [1, 3, 1, 2, 1]).unwrap();
        let img = f.image(&sample(&abcde())).unwrap();

        // fibre(1) = [a, c, e]
        assert_eq!(img.get_element("1").unwrap().as_tuple(), (0.7, 0.3, 0.1));
        // fibre(2) = [d]
        assert_eq!(img.get_element("2").unwrap().as_tuple(), (0.1, 0.4, 0.5));
        // fibre(3) = [b]
        assert_eq!(img.get_element("3").unwrap().as_tuple(), (0.4, 0.6, 0.9));
        // fibre(4) = [] → absolu
        assert_eq!(img.get_element("4").unwrap(), Triple::ABSOLUTE);
    }

    #[test]
    fn test_empty_fibre_is_absolute() {
        let v = Universe::from_labels([1, 2, 3, 4, 5]).unwrap();
        let f = Mapping::new(&abcde(), &v, [1, 3, 1, 2, 1]).unwrap();
        let img = f.image(&NeutrosophicSet::new(&abcde())).unwrap();
        assert_eq!(img.get_element("5").unwrap().as_tuple(), (1.0, 1.0, 0.0));
        assert_eq!(img.get_element("4").unwrap().as_tuple(), (1.0, 1.0, 0.0));
        assert_eq!(img.get_element("1").unwrap(), Triple::EMPTY);
    }

    #[test]
    fn test_counterimage_pulls_back() {
        let v = Universe::from_labels([1, 2, 3, 4]).unwrap();
        let f = Mapping::new(&abcde(), &v, [1, 3, 1, 2, 1]).unwrap();
        let b = NeutrosophicSet::with_triples(
            &v,
            [(0.5, 0.1, 0.2), (0.3, 0.3, 0.3), (0.9, 0.0, 0.1), (1.0, 1.0, 0.0)],
        )
        .unwrap();
        let pre = f.counterimage(&b).unwrap();
        assert_eq!(pre.universe(), &abcde());
        assert_eq!(pre.get_element("a").unwrap().as_tuple(), (0.5, 0.1, 0.2));
        assert_eq!(pre.get_element("b").unwrap().as_tuple(), (0.9, 0.0, 0.1));
        assert_eq!(pre.get_element("d").unwrap().as_tuple(), (0.3, 0.3, 0.3));
        assert_eq!(pre.get_element("e").unwrap().as_tuple(), (0.5, 0.1, 0.2));
    }

    #[test]
    fn test_set_contained_in_counterimage_of_image() {
        let v = Universe::from_labels([1, 2, 3, 4]).unwrap();
        let f = Mapping::new(&abcde(), &v, [1, 3, 1, 2, 1]).unwrap();
        let a = sample(&abcde());
        let back = f.counterimage(&f.image(&a).unwrap()).unwrap();
        assert!(a.is_subset(&back).unwrap());
    }

    #[test]
    fn test_wrong_universe_rejected() {
        let v = Universe::from_labels([1, 2, 3, 4]).unwrap();
        let f = Mapping::new(&abcde(), &v, [1, 3, 1, 2, 1]).unwrap();
        assert!(matches!(
            f.image(&NeutrosophicSet::new(&v)),
            Err(NsError::UniverseMismatch { operation: "image", .. })
        ));
        assert!(matches!(
            f.counterimage(&NeutrosophicSet::new(&abcde())),
            Err(NsError::UniverseMismatch { operation: "counterimage", .. })
        ));
    }

    #[test]
    fn test_incomplete_mapping_rejected() {
        let v = Universe::from_labels([1, 2]).unwrap();
        let mut f = Mapping::unassigned(&abcde(), &v);
        f.set_value("a", "1").unwrap();
        let err = f.image(&NeutrosophicSet::new(&abcde())).unwrap_err();
        assert_eq!(err, NsError::UnassignedValue { label: "b".into() });
        assert!(f.counterimage(&NeutrosophicSet::new(&v)).is_err());
    }
}
