// =============================================================================
// MAPPING — Une fonction entre deux Universes
// =============================================================================
//
// Un Mapping f : X → Y associe à CHAQUE élément du domaine X exactement un
// élément du codomaine Y.
//
// Représentation : pour chaque position du domaine, l'indice de la valeur
// dans le codomaine. Une valeur peut être provisoirement absente (None)
// quand la fonction est construite pas à pas avec `Mapping::unassigned` ;
// elle doit être complétée avant d'être utilisée.
//
// FIBRE : pour v ∈ Y, la fibre de v est f⁻¹({v}), l'ensemble des éléments
// du domaine envoyés sur v. Elle est toujours rendue dans l'ORDRE DU
// DOMAINE, jamais dans un ordre de table de hachage.
//
// EXEMPLE :
//   X = { a, b, c }, Y = { 1, 2 }, f = (2, 1, 2)
//     f(a) = 2, f(b) = 1, f(c) = 2
//     fibre(2) = [a, c]
//     fibre(1) = [b]
//
// Les opérateurs induits sur les ensembles neutrosophiques (image et
// contre-image) sont dans le module `migrate`.
//
// =============================================================================

use std::fmt;

use tracing::{debug, trace};

use crate::error::{NsError, NsResult};
use super::universe::Universe;
use super::validate::locate;

/// Fonction totale domaine → codomaine.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    domain: Universe,
    codomain: Universe,
    /// values[i] = indice dans le codomaine de f(domain[i])
    values: Vec<Option<usize>>,
}

impl Mapping {
    /// Crée une fonction dont aucune valeur n'est encore affectée.
    /// À compléter avec `set_value` avant tout usage.
    pub fn unassigned(domain: &Universe, codomain: &Universe) -> Self {
        Mapping {
            domain: domain.clone(),
            codomain: codomain.clone(),
            values: vec![None; domain.cardinality()],
        }
    }

    /// Crée une fonction à partir d'une liste de valeurs alignée sur l'ordre
    /// du domaine : `values[i]` est l'image du i-ème élément.
    pub fn new<I, T>(domain: &Universe, codomain: &Universe, values: I) -> NsResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if values.len() != domain.cardinality() {
            return Err(NsError::ArityMismatch {
                expected: domain.cardinality(),
                found: values.len(),
            });
        }
        let indices = values
            .iter()
            .map(|v| codomain_index(codomain, v).map(Some))
            .collect::<NsResult<Vec<_>>>()?;

        debug!(domain = %domain, codomain = %codomain, "mapping built from values");
        Ok(Mapping {
            domain: domain.clone(),
            codomain: codomain.clone(),
            values: indices,
        })
    }

    /// Crée une fonction à partir d'une association ordonnée clé → valeur.
    ///
    /// - le domaine est l'ensemble des clés, dans l'ordre donné
    /// - le codomaine est l'ensemble des valeurs distinctes, dans l'ordre de
    ///   première apparition
    pub fn from_association<I, K, V>(pairs: I) -> NsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: ToString,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let domain = Universe::from_labels(pairs.iter().map(|(k, _)| k))
            .map_err(|e| as_role(e, "domain"))?;

        let mut distinct: Vec<&String> = Vec::new();
        for (_, v) in &pairs {
            if !distinct.contains(&v) {
                distinct.push(v);
            }
        }
        let codomain = Universe::from_labels(distinct)?;

        Mapping::new(&domain, &codomain, pairs.iter().map(|(_, v)| v))
    }

    /// Comme `from_association`, mais contre un domaine et un codomaine
    /// déclarés :
    /// - les clés doivent former exactement le domaine (ordre ignoré)
    /// - les valeurs doivent appartenir au codomaine
    ///
    /// Les valeurs sont rangées dans l'ordre du domaine déclaré.
    pub fn with_association<I, K, V>(
        domain: &Universe,
        codomain: &Universe,
        pairs: I,
    ) -> NsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: ToString,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let inferred = Universe::from_labels(pairs.iter().map(|(k, _)| k))
            .map_err(|e| as_role(e, "domain"))?;
        if !inferred.same_labels(domain) {
            return Err(NsError::DomainMismatch {
                declared: domain.to_string(),
                inferred: inferred.to_string(),
            });
        }

        let mut values = vec![None; domain.cardinality()];
        for (k, v) in &pairs {
            let i = locate(domain, k, "domain")?;
            values[i] = Some(codomain_index(codomain, v)?);
        }

        debug!(domain = %domain, codomain = %codomain, "mapping built from association");
        Ok(Mapping {
            domain: domain.clone(),
            codomain: codomain.clone(),
            values,
        })
    }

    pub fn domain(&self) -> &Universe {
        &self.domain
    }

    pub fn codomain(&self) -> &Universe {
        &self.codomain
    }

    /// f(u)
    pub fn get_value(&self, u: &str) -> NsResult<&str> {
        let i = locate(&self.domain, u, "domain")?;
        self.value_at(i)
    }

    /// Réaffecte f(u) = v ; `u` doit être dans le domaine et `v` dans le
    /// codomaine.
    pub fn set_value(&mut self, u: &str, v: &str) -> NsResult<()> {
        let i = locate(&self.domain, u, "domain")?;
        let j = locate(&self.codomain, v, "codomain")?;
        self.values[i] = Some(j);
        Ok(())
    }

    /// Fibre de `v` : les éléments du domaine envoyés sur `v`, dans l'ordre
    /// du domaine.
    pub fn fibre(&self, v: &str) -> NsResult<Vec<&str>> {
        let j = locate(&self.codomain, v, "codomain")?;
        let fibre: Vec<&str> = self
            .domain
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| **value == Some(j))
            .map(|(u, _)| u.as_str())
            .collect();
        trace!(value = v, size = fibre.len(), "fibre computed");
        Ok(fibre)
    }

    /// Vrai si chaque élément du domaine a une valeur.
    pub fn is_total(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Les couples (u, f(u)) dans l'ordre du domaine ; None si non affecté.
    pub fn associations(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.domain.iter().zip(&self.values).map(|(u, value)| {
            (
                u.as_str(),
                value.map(|j| self.codomain.elements()[j].as_str()),
            )
        })
    }

    /// Mêmes domaine, codomaine et valeurs. Des domaines ou codomaines
    /// différents donnent `false`, pas une erreur.
    pub fn equals(&self, other: &Mapping) -> bool {
        self == other
    }

    /// Échoue sur le premier élément du domaine sans valeur.
    pub(crate) fn ensure_total(&self) -> NsResult<()> {
        match self.values.iter().position(Option::is_none) {
            Some(i) => Err(NsError::UnassignedValue {
                label: self.domain.elements()[i].clone(),
            }),
            None => Ok(()),
        }
    }

    /// Indices (dans le codomaine) des valeurs, pour une fonction totale.
    pub(crate) fn value_indices(&self) -> NsResult<Vec<usize>> {
        self.ensure_total()?;
        Ok(self.values.iter().flatten().copied().collect())
    }

    fn value_at(&self, i: usize) -> NsResult<&str> {
        match self.values[i] {
            Some(j) => Ok(self.codomain.elements()[j].as_str()),
            None => Err(NsError::UnassignedValue {
                label: self.domain.elements()[i].clone(),
            }),
        }
    }
}

fn codomain_index(codomain: &Universe, value: &str) -> NsResult<usize> {
    codomain
        .position(value)
        .ok_or_else(|| NsError::CodomainViolation {
            value: value.to_string(),
            codomain: codomain.to_string(),
        })
}

fn as_role(err: NsError, role: &'static str) -> NsError {
    match err {
        NsError::DuplicateElement { label, .. } => NsError::DuplicateElement { label, role },
        other => other,
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrows: Vec<String> = self
            .associations()
            .map(|(u, v)| format!("{}->{}", u, v.unwrap_or("?")))
            .collect();
        write!(f, "{{ {} }}", arrows.join(", "))
    }
}
