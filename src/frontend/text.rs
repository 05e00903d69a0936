// =============================================================================
// FRONTEND TEXT — Du texte libre vers les arguments des constructeurs
// =============================================================================
//
// Le cœur n'accepte que des données structurées. Ce module traduit les
// écritures "à la main" vers ces données :
//
//   "a, b; c"  "{a b c}"  "(1,2,3)"         → étiquettes ordonnées
//   "(0.7;0.3,0.1)"  "[0.7 0.3 0.1]"        → un triplet
//   "[0.4,0.4,0.3], (0.1,0.1,0.1); ..."     → une liste de triplets
//   "a->1, b->3; c:1"  "{'a':'1','b':'2'}"  → une association clé → valeur
//
// Séparateurs : virgule, point-virgule et espaces sont équivalents.
// Crochets, accolades, parenthèses et guillemets autour des étiquettes
// sont ignorés.
//
// Toute écriture illisible donne MalformedInput. Les autres contrôles
// (doublons, degrés hors de [0,1], arité) restent ceux du cœur.
//
// =============================================================================

use crate::core::mapping::Mapping;
use crate::core::set::NeutrosophicSet;
use crate::core::universe::Universe;
use crate::error::{NsError, NsResult};

const BRACKETS: [char; 6] = ['{', '}', '(', ')', '[', ']'];
const QUOTES: [char; 2] = ['\'', '"'];

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Découpe un texte en étiquettes, dans l'ordre.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| !BRACKETS.contains(c) && !QUOTES.contains(c))
        .collect::<String>()
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_numbers(text: &str, context: &str) -> NsResult<Vec<f64>> {
    text.split(|c: char| is_separator(c) || BRACKETS.contains(&c))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| NsError::malformed(context, format!("'{}' is not a number", token)))
        })
        .collect()
}

fn as_triple(numbers: &[f64], context: &str) -> NsResult<(f64, f64, f64)> {
    match numbers {
        [mu, sigma, omega] => Ok((*mu, *sigma, *omega)),
        _ => Err(NsError::malformed(
            context,
            format!("a triple needs 3 degrees, found {}", numbers.len()),
        )),
    }
}

/// Lit un seul triplet : "(0.7;0.3,0.1)", "0.7 0.3 0.1"...
pub fn parse_triple(text: &str) -> NsResult<(f64, f64, f64)> {
    as_triple(&parse_numbers(text, text)?, text)
}

/// Lit une liste de triplets.
///
/// Deux écritures :
/// - groupes entre crochets/parenthèses, un triplet par groupe
/// - liste plate de nombres, découpée par paquets de trois
pub fn parse_triples(text: &str) -> NsResult<Vec<(f64, f64, f64)>> {
    if !text.contains(|c: char| BRACKETS.contains(&c)) {
        let numbers = parse_numbers(text, text)?;
        if numbers.len() % 3 != 0 {
            return Err(NsError::malformed(
                text,
                format!("{} degrees do not form whole triples", numbers.len()),
            ));
        }
        return Ok(numbers.chunks(3).map(|c| (c[0], c[1], c[2])).collect());
    }

    let mut triples = Vec::new();
    let mut open: Vec<char> = Vec::new();
    let mut buffer = String::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => {
                if buffer.chars().any(|b| !is_separator(b)) {
                    return Err(NsError::malformed(
                        text,
                        format!("degrees mixed with a nested '{}' group", c),
                    ));
                }
                open.push(c);
                buffer.clear();
            }
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if open.pop() != Some(expected) {
                    return Err(NsError::malformed(text, format!("unbalanced '{}'", c)));
                }
                if buffer.chars().any(|b| !is_separator(b)) {
                    triples.push(as_triple(&parse_numbers(&buffer, text)?, text)?);
                }
                buffer.clear();
            }
            _ if open.is_empty() => {
                if !is_separator(c) {
                    return Err(NsError::malformed(
                        text,
                        format!("unexpected '{}' outside brackets", c),
                    ));
                }
            }
            _ => buffer.push(c),
        }
    }
    if !open.is_empty() {
        return Err(NsError::malformed(text, "unclosed bracket"));
    }
    Ok(triples)
}

/// Lit une association ordonnée "clé:valeur" ou "clé->valeur".
pub fn parse_association(text: &str) -> NsResult<Vec<(String, String)>> {
    let normalized: String = text
        .replace("->", ":")
        .replace(':', " : ")
        .chars()
        .filter(|c| !BRACKETS.contains(c) && !QUOTES.contains(c))
        .collect();
    let tokens: Vec<&str> = normalized
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() % 3 != 0 {
        return Err(NsError::malformed(text, "expected 'key:value' pairs"));
    }
    tokens
        .chunks(3)
        .map(|chunk| match chunk {
            [key, ":", value] if *key != ":" && *value != ":" => {
                Ok((key.to_string(), value.to_string()))
            }
            _ => Err(NsError::malformed(
                text,
                format!("'{}' is not a 'key:value' pair", chunk.join(" ")),
            )),
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Constructeurs nommés à partir de texte
// -----------------------------------------------------------------------------

impl Universe {
    /// `Universe::from_delimited_text("a, b; c")` → { a, b, c }
    pub fn from_delimited_text(text: &str) -> NsResult<Universe> {
        Universe::from_labels(parse_labels(text))
    }
}

impl NeutrosophicSet {
    /// Ensemble dont les triplets sont écrits dans l'ordre de l'univers.
    pub fn from_text(universe: &Universe, triples: &str) -> NsResult<NeutrosophicSet> {
        NeutrosophicSet::with_triples(universe, parse_triples(triples)?)
    }

    /// `set_element` avec un triplet écrit en texte.
    pub fn set_element_text(&mut self, u: &str, triple: &str) -> NsResult<()> {
        self.set_element(u, parse_triple(triple)?)
    }
}

impl Mapping {
    /// Fonction dont les valeurs sont écrites dans l'ordre du domaine :
    /// `Mapping::from_text(&x, &y, "(1,3,1,2,1)")`.
    pub fn from_text(domain: &Universe, codomain: &Universe, values: &str) -> NsResult<Mapping> {
        Mapping::new(domain, codomain, parse_labels(values))
    }

    /// Fonction décrite par ses flèches : `"a->1, b->3, c->1"`.
    pub fn from_association_text(text: &str) -> NsResult<Mapping> {
        Mapping::from_association(parse_association(text)?)
    }
}
