// =============================================================================
// SET — Un ensemble neutrosophique à valeur unique sur un Universe
// =============================================================================
//
// Un NeutrosophicSet A sur l'univers U est une fonction TOTALE :
//   A : U → [0,1]³,   u ↦ (μ_A(u), σ_A(u), ω_A(u))
//
// Représentation : un Vec<Triple> aligné sur l'ordre de l'univers. Chaque
// élément a donc toujours un triplet valide ; pas de clé manquante, pas de
// triplet partiel.
//
// OPÉRATIONS (toutes point par point) :
//
//   A ∪ B   = (max μ, max σ, min ω)
//   A ∩ B   = (min μ, min σ, max ω)
//   A^c     = (ω, 1-σ, μ)
//   A \ B   = (min(μ_A, ω_B), min(σ_A, 1-σ_B), max(ω_A, μ_B))
//   A ⊆ B   ⟺ ∀u : μ_A ≤ μ_B, σ_A ≤ σ_B, ω_A ≥ ω_B
//   A = B   ⟺ A ⊆ B et B ⊆ A
//
// Toute opération binaire exige des univers STRUCTURELLEMENT égaux : sinon
// UniverseMismatch, jamais un résultat silencieux.
//
// =============================================================================

use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};

use crate::error::{NsError, NsResult};
use super::degree::{DegreeKind, Triple};
use super::universe::Universe;
use super::validate::{ensure_same_universe, locate};

/// Ensemble neutrosophique : un triplet par élément de l'univers.
#[derive(Debug, Clone)]
pub struct NeutrosophicSet {
    universe: Universe,
    /// triples[i] est le triplet de universe.elements()[i]
    triples: Vec<Triple>,
}

impl NeutrosophicSet {
    /// Crée l'ensemble vide : chaque élément vaut (0, 0, 1).
    pub fn new(universe: &Universe) -> Self {
        NeutrosophicSet {
            universe: universe.clone(),
            triples: vec![Triple::EMPTY; universe.cardinality()],
        }
    }

    /// Crée un ensemble à partir d'une liste de triplets alignée sur l'ordre
    /// de l'univers. Rien n'est construit si un seul triplet est invalide.
    pub fn with_triples<I>(universe: &Universe, triples: I) -> NsResult<Self>
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let raw: Vec<(f64, f64, f64)> = triples.into_iter().collect();
        if raw.len() != universe.cardinality() {
            return Err(NsError::ArityMismatch {
                expected: universe.cardinality(),
                found: raw.len(),
            });
        }
        let triples = raw
            .into_iter()
            .zip(universe.iter())
            .map(|((mu, sigma, omega), label)| {
                Triple::new(mu, sigma, omega).map_err(|e| e.at(label))
            })
            .collect::<NsResult<Vec<_>>>()?;
        Ok(NeutrosophicSet {
            universe: universe.clone(),
            triples,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Cardinalité de l'univers sous-jacent
    pub fn cardinality(&self) -> usize {
        self.universe.cardinality()
    }

    /// Parcourt les couples (étiquette, triplet) dans l'ordre de l'univers.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Triple)> + '_ {
        self.universe
            .iter()
            .map(String::as_str)
            .zip(self.triples.iter().copied())
    }

    // -------------------------------------------------------------------------
    // Accès élément par élément
    // -------------------------------------------------------------------------

    /// Affecte le triplet (μ, σ, ω) de l'élément `u`.
    ///
    /// L'élément est cherché AVANT la validation des degrés ; en cas d'erreur
    /// l'ensemble reste inchangé.
    pub fn set_element(&mut self, u: &str, (mu, sigma, omega): (f64, f64, f64)) -> NsResult<()> {
        let i = locate(&self.universe, u, "universe")?;
        let triple = Triple::new(mu, sigma, omega).map_err(|e| e.at(u))?;
        self.triples[i] = triple;
        Ok(())
    }

    /// Affecte un triplet déjà validé.
    pub fn set_triple(&mut self, u: &str, triple: Triple) -> NsResult<()> {
        let i = locate(&self.universe, u, "universe")?;
        self.triples[i] = triple;
        Ok(())
    }

    pub fn get_element(&self, u: &str) -> NsResult<Triple> {
        let i = locate(&self.universe, u, "universe")?;
        Ok(self.triples[i])
    }

    /// Affecte une seule composante du triplet de `u`.
    pub fn set_degree(&mut self, u: &str, kind: DegreeKind, value: f64) -> NsResult<()> {
        let i = locate(&self.universe, u, "universe")?;
        let updated = self.triples[i].with(kind, value).map_err(|e| e.at(u))?;
        self.triples[i] = updated;
        Ok(())
    }

    pub fn get_degree(&self, u: &str, kind: DegreeKind) -> NsResult<f64> {
        Ok(self.get_element(u)?.get(kind))
    }

    pub fn set_membership(&mut self, u: &str, value: f64) -> NsResult<()> {
        self.set_degree(u, DegreeKind::Membership, value)
    }

    pub fn set_indeterminacy(&mut self, u: &str, value: f64) -> NsResult<()> {
        self.set_degree(u, DegreeKind::Indeterminacy, value)
    }

    pub fn set_non_membership(&mut self, u: &str, value: f64) -> NsResult<()> {
        self.set_degree(u, DegreeKind::NonMembership, value)
    }

    pub fn get_membership(&self, u: &str) -> NsResult<f64> {
        self.get_degree(u, DegreeKind::Membership)
    }

    pub fn get_indeterminacy(&self, u: &str) -> NsResult<f64> {
        self.get_degree(u, DegreeKind::Indeterminacy)
    }

    pub fn get_non_membership(&self, u: &str) -> NsResult<f64> {
        self.get_degree(u, DegreeKind::NonMembership)
    }

    /// Remet chaque élément à (0, 0, 1), sur place.
    pub fn set_empty(&mut self) {
        self.triples.fill(Triple::EMPTY);
    }

    /// Met chaque élément à (1, 1, 0), sur place.
    pub fn set_absolute(&mut self) {
        self.triples.fill(Triple::ABSOLUTE);
    }

    /// Vrai si chaque élément vaut (0, 0, 1).
    pub fn is_empty(&self) -> bool {
        self.triples.iter().all(|t| *t == Triple::EMPTY)
    }

    // -------------------------------------------------------------------------
    // Relations
    // -------------------------------------------------------------------------

    /// A ⊆ B
    pub fn is_subset(&self, other: &NeutrosophicSet) -> NsResult<bool> {
        ensure_same_universe("subset", &self.universe, &other.universe)?;
        Ok(self
            .triples
            .iter()
            .zip(&other.triples)
            .all(|(a, b)| a.is_contained_in(b)))
    }

    /// A ⊇ B  ⟺  B ⊆ A
    pub fn is_superset(&self, other: &NeutrosophicSet) -> NsResult<bool> {
        other.is_subset(self)
    }

    /// Double inclusion. Passe par le même chemin d'échec que `is_subset`.
    pub fn equals(&self, other: &NeutrosophicSet) -> NsResult<bool> {
        Ok(self.is_subset(other)? && other.is_subset(self)?)
    }

    /// A et B sont disjoints si A ∩ B est l'ensemble vide.
    pub fn is_disjoint(&self, other: &NeutrosophicSet) -> NsResult<bool> {
        let meet = self.intersection(other)?;
        meet.equals(&NeutrosophicSet::new(&self.universe))
    }

    // -------------------------------------------------------------------------
    // Opérations
    // -------------------------------------------------------------------------

    fn zip_with(
        &self,
        operation: &'static str,
        other: &NeutrosophicSet,
        f: impl Fn(&Triple, &Triple) -> Triple,
    ) -> NsResult<NeutrosophicSet> {
        ensure_same_universe(operation, &self.universe, &other.universe)?;
        Ok(NeutrosophicSet {
            universe: self.universe.clone(),
            triples: self
                .triples
                .iter()
                .zip(&other.triples)
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    pub fn union(&self, other: &NeutrosophicSet) -> NsResult<NeutrosophicSet> {
        self.zip_with("union", other, Triple::union)
    }

    pub fn intersection(&self, other: &NeutrosophicSet) -> NsResult<NeutrosophicSet> {
        self.zip_with("intersection", other, Triple::intersection)
    }

    pub fn difference(&self, other: &NeutrosophicSet) -> NsResult<NeutrosophicSet> {
        self.zip_with("difference", other, Triple::difference)
    }

    pub fn complement(&self) -> NeutrosophicSet {
        NeutrosophicSet {
            universe: self.universe.clone(),
            triples: self.triples.iter().map(Triple::complement).collect(),
        }
    }
}

// Sucre syntaxique : |, &, -, !
// Les opérateurs binaires gardent le contrat des méthodes nommées et
// renvoient donc un NsResult.

impl BitOr for &NeutrosophicSet {
    type Output = NsResult<NeutrosophicSet>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd for &NeutrosophicSet {
    type Output = NsResult<NeutrosophicSet>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl Sub for &NeutrosophicSet {
    type Output = NsResult<NeutrosophicSet>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl Not for &NeutrosophicSet {
    type Output = NeutrosophicSet;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl fmt::Display for NeutrosophicSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .iter()
            .map(|(label, triple)| format!("{}:{}", label, triple))
            .collect();
        write!(f, "{{ {} }}", cells.join(", "))
    }
}
