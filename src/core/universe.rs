// =============================================================================
// UNIVERSE — L'univers de discours : une suite ordonnée d'étiquettes uniques
// =============================================================================
//
// Un Universe est l'ensemble FINI sur lequel on définit les ensembles
// neutrosophiques et les fonctions. Chaque élément est une étiquette (String).
//
// Deux propriétés fondamentales :
//   - UNICITÉ : deux étiquettes identiques font échouer la construction
//   - ORDRE   : l'ordre d'insertion est conservé tel quel ; il détermine
//               l'ordre d'itération, l'ordre d'affichage, et la
//               correspondance positionnelle quand on construit un ensemble
//               ou une fonction à partir d'une liste de valeurs parallèle.
//
// L'égalité est STRUCTURELLE : mêmes étiquettes, dans le même ordre.
//   { a, b, c } ≠ { c, b, a }
//
// Un Universe est immuable une fois construit.
//
// =============================================================================

use std::collections::HashMap;
use std::fmt;

use crate::error::{NsError, NsResult};

/// Univers ordonné d'étiquettes distinctes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    /// Les étiquettes, dans l'ordre d'insertion
    elements: Vec<String>,
    /// Index inverse étiquette → position (dérivé de `elements`)
    index: HashMap<String, usize>,
}

impl Universe {
    /// Construit un univers à partir de valeurs quelconques converties en
    /// étiquettes : `Universe::from_labels([1, 2, 3])` donne { 1, 2, 3 }.
    pub fn from_labels<I, T>(labels: I) -> NsResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let mut elements = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            let label = label.to_string();
            if index.contains_key(&label) {
                return Err(NsError::DuplicateElement {
                    label,
                    role: "universe",
                });
            }
            index.insert(label.clone(), elements.len());
            elements.push(label);
        }
        if elements.is_empty() {
            return Err(NsError::EmptyInput);
        }
        Ok(Universe { elements, index })
    }

    /// Les étiquettes en lecture seule, dans l'ordre stocké.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Nombre d'éléments
    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Position d'une étiquette dans l'ordre stocké
    pub fn position(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Itérateur fini et redémarrable sur les étiquettes.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.elements.iter()
    }

    /// Égalité structurelle (équivalent à `==`).
    pub fn equals(&self, other: &Universe) -> bool {
        self == other
    }

    /// Même ensemble d'étiquettes, ordre ignoré.
    pub fn same_labels(&self, other: &Universe) -> bool {
        self.cardinality() == other.cardinality()
            && self.elements.iter().all(|e| other.contains(e))
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} }}", self.elements.join(", "))
    }
}
