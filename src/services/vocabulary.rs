//! Controlled vocabulary
//!
//! The fixed list of recognized domain keywords that tag extraction matches
//! against. Loaded once at process start, read-only thereafter.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::services::tags::normalize;

/// The most common words found in recipes (ingredients and cooking methods).
const COMMON_WORDS: &[&str] = &[
    "sal", "azucar", "aceite", "cebolla",
    "ajo", "tomate", "pollo", "carne", "pescado",
    "arroz", "pasta", "huevo", "huevos", "leche", "harina",
    "pan", "queso", "mayonesa", "mostaza", "vinagre",
    "limon", "naranja", "manzana", "platano", "fresa",
    "chocolate", "vainilla", "canela", "nuez", "mantequilla",
    "crema", "almendra", "cacahuete", "mermelada", "miel",
    "jengibre", "curry", "pimienta", "salvia", "romero",
    "oregano", "laurel", "tomillo", "perejil", "cilantro",
    "menta", "albahaca", "salsa", "sopa", "ensalada",
    "guiso", "horneado", "frito", "asado", "cocido", "microondas",
];

/// Process-wide vocabulary instance
pub static VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::from_terms(COMMON_WORDS.iter().copied()));

/// Immutable set of known keywords, held in normalized form
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary, normalizing every term on the way in
    pub fn from_terms<'a>(terms: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            terms: terms.into_iter().map(normalize).collect(),
        }
    }

    /// Exact full-word membership test; `word` must already be normalized
    pub fn contains(&self, word: &str) -> bool {
        self.terms.contains(word)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
