// =============================================================================
// DEGREE — Le triplet (μ, σ, ω) attaché à chaque élément
// =============================================================================
//
// Un ensemble neutrosophique à valeur unique associe à chaque élément de
// l'univers TROIS degrés indépendants, chacun dans [0,1] :
//   - μ : appartenance       (membership)
//   - σ : indétermination    (indeterminacy)
//   - ω : non-appartenance   (non-membership)
//
// Contrairement aux ensembles flous intuitionnistes, on n'exige PAS
// μ + σ + ω ≤ 1 : les trois degrés sont libres.
//
// Deux triplets remarquables :
//   (0, 0, 1) → l'ensemble vide (nul)
//   (1, 1, 0) → l'ensemble absolu
//
// Toutes les opérations ensemblistes sont définies POINT PAR POINT sur ces
// triplets ; le module `set` ne fait que les appliquer élément par élément.
//
// =============================================================================

use std::fmt;

use crate::error::NsResult;
use super::validate::check_degree;

/// Les trois composantes d'un triplet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegreeKind {
    Membership,
    Indeterminacy,
    NonMembership,
}

impl DegreeKind {
    pub fn name(&self) -> &'static str {
        match self {
            DegreeKind::Membership => "membership",
            DegreeKind::Indeterminacy => "indeterminacy",
            DegreeKind::NonMembership => "non-membership",
        }
    }
}

impl fmt::Display for DegreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Un triplet (μ, σ, ω) toujours valide : chaque composante est dans [0,1].
///
/// Les champs sont privés ; la seule façon d'obtenir un triplet est
/// `Triple::new` (validant) ou les constantes `EMPTY` / `ABSOLUTE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple {
    membership: f64,
    indeterminacy: f64,
    non_membership: f64,
}

impl Triple {
    /// (0, 0, 1) : appartenance nulle, non-appartenance totale
    pub const EMPTY: Triple = Triple {
        membership: 0.0,
        indeterminacy: 0.0,
        non_membership: 1.0,
    };

    /// (1, 1, 0) : l'élément absolu
    pub const ABSOLUTE: Triple = Triple {
        membership: 1.0,
        indeterminacy: 1.0,
        non_membership: 0.0,
    };

    /// Crée un triplet après avoir vérifié que μ, σ, ω sont dans [0,1].
    pub fn new(membership: f64, indeterminacy: f64, non_membership: f64) -> NsResult<Self> {
        Ok(Triple {
            membership: check_degree(DegreeKind::Membership, membership)?,
            indeterminacy: check_degree(DegreeKind::Indeterminacy, indeterminacy)?,
            non_membership: check_degree(DegreeKind::NonMembership, non_membership)?,
        })
    }

    pub fn membership(&self) -> f64 {
        self.membership
    }

    pub fn indeterminacy(&self) -> f64 {
        self.indeterminacy
    }

    pub fn non_membership(&self) -> f64 {
        self.non_membership
    }

    /// Lit une composante par son genre
    pub fn get(&self, kind: DegreeKind) -> f64 {
        match kind {
            DegreeKind::Membership => self.membership,
            DegreeKind::Indeterminacy => self.indeterminacy,
            DegreeKind::NonMembership => self.non_membership,
        }
    }

    /// Copie du triplet avec une composante remplacée (validée).
    pub fn with(&self, kind: DegreeKind, value: f64) -> NsResult<Self> {
        let value = check_degree(kind, value)?;
        let mut t = *self;
        match kind {
            DegreeKind::Membership => t.membership = value,
            DegreeKind::Indeterminacy => t.indeterminacy = value,
            DegreeKind::NonMembership => t.non_membership = value,
        }
        Ok(t)
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.membership, self.indeterminacy, self.non_membership)
    }

    /// Inclusion ponctuelle : μ ≤ μ', σ ≤ σ', ω ≥ ω'.
    ///
    /// Attention à l'asymétrie : une non-appartenance PLUS FAIBLE signifie
    /// "plus contenu". Les comparaisons tolèrent un écart de `f64::EPSILON`,
    /// sinon 1-(1-σ) ne retomberait pas sur σ.
    pub fn is_contained_in(&self, other: &Triple) -> bool {
        self.membership <= other.membership + f64::EPSILON
            && self.indeterminacy <= other.indeterminacy + f64::EPSILON
            && self.non_membership + f64::EPSILON >= other.non_membership
    }

    /// (max μ, max σ, min ω)
    pub fn union(&self, other: &Triple) -> Triple {
        Triple {
            membership: self.membership.max(other.membership),
            indeterminacy: self.indeterminacy.max(other.indeterminacy),
            non_membership: self.non_membership.min(other.non_membership),
        }
    }

    /// (min μ, min σ, max ω)
    pub fn intersection(&self, other: &Triple) -> Triple {
        Triple {
            membership: self.membership.min(other.membership),
            indeterminacy: self.indeterminacy.min(other.indeterminacy),
            non_membership: self.non_membership.max(other.non_membership),
        }
    }

    /// (ω, 1-σ, μ)
    pub fn complement(&self) -> Triple {
        Triple {
            membership: self.non_membership,
            indeterminacy: 1.0 - self.indeterminacy,
            non_membership: self.membership,
        }
    }

    /// (min(μ, ω'), min(σ, 1-σ'), max(ω, μ'))
    ///
    /// Coïncide avec `self.intersection(&other.complement())`.
    pub fn difference(&self, other: &Triple) -> Triple {
        Triple {
            membership: self.membership.min(other.non_membership),
            indeterminacy: self.indeterminacy.min(1.0 - other.indeterminacy),
            non_membership: self.non_membership.max(other.membership),
        }
    }
}

impl Default for Triple {
    fn default() -> Self {
        Triple::EMPTY
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})",
            self.membership, self.indeterminacy, self.non_membership
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NsError;

    fn t(mu: f64, sigma: f64, omega: f64) -> Triple {
        Triple::new(mu, sigma, omega).unwrap()
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Triple::new(1.5, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            NsError::DegreeRange { degree: "membership", .. }
        ));
        assert!(Triple::new(0.0, -0.1, 0.0).is_err());
        assert!(Triple::new(0.0, 0.0, f64::NAN).is_err());
        assert!(Triple::new(0.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Triple::default(), Triple::EMPTY);
        assert_eq!(Triple::EMPTY.as_tuple(), (0.0, 0.0, 1.0));
        assert_eq!(Triple::ABSOLUTE.as_tuple(), (1.0, 1.0, 0.0));
    }

    #[test]
    fn test_pointwise_rules() {
        let a = t(0.7, 0.3, 0.1);
        let b = t(0.4, 0.6, 0.9);
        assert_eq!(a.union(&b).as_tuple(), (0.7, 0.6, 0.1));
        assert_eq!(a.intersection(&b).as_tuple(), (0.4, 0.3, 0.9));
        assert_eq!(a.complement().as_tuple(), (0.1, 0.7, 0.7));
        assert_eq!(a.difference(&b), a.intersection(&b.complement()));
    }

    #[test]
    fn test_containment_is_asymmetric_on_omega() {
        let low = t(0.2, 0.2, 0.8);
        let high = t(0.5, 0.5, 0.3);
        assert!(low.is_contained_in(&high));
        assert!(!high.is_contained_in(&low));
        assert!(Triple::EMPTY.is_contained_in(&low));
        assert!(low.is_contained_in(&Triple::ABSOLUTE));
    }

    #[test]
    fn test_double_complement_is_contained_both_ways() {
        for sigma in [0.1, 0.3, 0.7] {
            let a = t(0.2, sigma, 0.6);
            let back = a.complement().complement();
            assert!(back.is_contained_in(&a));
            assert!(a.is_contained_in(&back));
        }
        assert!(!t(0.2, 0.3, 0.6).is_contained_in(&t(0.2, 0.2999, 0.6)));
    }

    #[test]
    fn test_with_replaces_one_component() {
        let a = t(0.7, 0.3, 0.1);
        let b = a.with(DegreeKind::Indeterminacy, 0.9).unwrap();
        assert_eq!(b.as_tuple(), (0.7, 0.9, 0.1));
        assert!(a.with(DegreeKind::NonMembership, 2.0).is_err());
        assert_eq!(b.get(DegreeKind::Indeterminacy), 0.9);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", t(0.7, 0.3, 0.1)), "(0.7,0.3,0.1)");
        assert_eq!(format!("{}", Triple::EMPTY), "(0,0,1)");
    }
}
