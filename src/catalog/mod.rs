//! Static reference catalog: job roles, skill synonyms, and industry categories
//!
//! The catalog is pure data consumed by every scoring component. It is built
//! once at process start and never mutated afterwards, so concurrent analyses
//! can share it freely.

mod data;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

/// One catalog role with its requirement sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub name: String,
    pub category: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub soft_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub keywords: Vec<String>,
}

/// Canonical-skill to variant-spellings mapping, consulted bidirectionally.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    canonical_to_variants: HashMap<String, Vec<String>>,
    variant_to_canonical: HashMap<String, String>,
}

impl SynonymTable {
    fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        let mut canonical_to_variants = HashMap::new();
        let mut variant_to_canonical = HashMap::new();

        for (canonical, variants) in pairs {
            let canonical = canonical.to_lowercase();
            let variants: Vec<String> = variants.iter().map(|v| v.to_lowercase()).collect();
            for variant in &variants {
                variant_to_canonical.insert(variant.clone(), canonical.clone());
            }
            canonical_to_variants.insert(canonical, variants);
        }

        Self {
            canonical_to_variants,
            variant_to_canonical,
        }
    }

    /// Resolve a surface form to its canonical skill name. A canonical name
    /// resolves to itself; an unknown term passes through unchanged.
    pub fn canonicalize<'a>(&'a self, skill: &'a str) -> &'a str {
        if self.canonical_to_variants.contains_key(skill) {
            return skill;
        }
        self.variant_to_canonical
            .get(skill)
            .map(|s| s.as_str())
            .unwrap_or(skill)
    }

    /// Known variant spellings of a canonical skill, if any.
    pub fn variants_of(&self, canonical: &str) -> Option<&[String]> {
        self.canonical_to_variants
            .get(canonical)
            .map(|v| v.as_slice())
    }

    /// True if `a` and `b` name the same skill after canonicalization.
    pub fn same_skill(&self, a: &str, b: &str) -> bool {
        a == b || self.canonicalize(a) == self.canonicalize(b)
    }

    /// Every term the table knows about: canonical names and variants.
    pub fn all_terms(&self) -> impl Iterator<Item = &str> {
        self.canonical_to_variants
            .keys()
            .map(|s| s.as_str())
            .chain(self.variant_to_canonical.keys().map(|s| s.as_str()))
    }
}

/// The full immutable catalog.
#[derive(Debug)]
pub struct Catalog {
    roles: Vec<RoleRecord>,
    synonyms: SynonymTable,
}

impl Catalog {
    pub fn roles(&self) -> &[RoleRecord] {
        &self.roles
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Roles grouped by industry category, catalog order preserved.
    pub fn roles_by_category(&self) -> BTreeMap<&str, Vec<&RoleRecord>> {
        let mut categories: BTreeMap<&str, Vec<&RoleRecord>> = BTreeMap::new();
        for role in &self.roles {
            categories.entry(role.category.as_str()).or_default().push(role);
        }
        categories
    }

    /// The universe of known skills: every role's skills, tools, and soft
    /// skills plus every synonym-table term, all lower-cased and deduplicated.
    pub fn skill_universe(&self) -> Vec<String> {
        let mut universe = HashSet::new();
        for role in &self.roles {
            for skill in role
                .skills
                .iter()
                .chain(&role.tools)
                .chain(&role.soft_skills)
            {
                universe.insert(skill.to_lowercase());
            }
        }
        for term in self.synonyms.all_terms() {
            universe.insert(term.to_string());
        }
        universe.into_iter().collect()
    }
}

/// The built-in catalog, constructed on first use and frozen.
pub fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog {
        roles: data::builtin_roles(),
        synonyms: SynonymTable::from_pairs(data::SKILL_SYNONYMS),
    })
}
