//! Lookup of articles that do not represent fabrication.
//!
//! The table is built on first use and never modified afterwards.
//! Keys are stored already normalized (trimmed, uppercase).

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImproductiveKind {
    Cleaning,
    Maintenance,
    Meeting,
    Training,
    Waiting,
    Breakdown,
    Inventory,
    Rework,
    Setup,
}

impl ImproductiveKind {
    pub fn label(&self) -> &'static str {
        match self {
            ImproductiveKind::Cleaning => "cleaning",
            ImproductiveKind::Maintenance => "maintenance",
            ImproductiveKind::Meeting => "meeting",
            ImproductiveKind::Training => "training",
            ImproductiveKind::Waiting => "waiting",
            ImproductiveKind::Breakdown => "breakdown",
            ImproductiveKind::Inventory => "inventory",
            ImproductiveKind::Rework => "rework",
            ImproductiveKind::Setup => "setup",
        }
    }
}

static IMPRODUCTIVE_ARTICLES: Lazy<HashMap<&'static str, ImproductiveKind>> = Lazy::new(|| {
    use ImproductiveKind::*;

    HashMap::from([
        ("LIMPIEZA", Cleaning),
        ("ORDEN Y LIMPIEZA", Cleaning),
        ("IMP-LIMP", Cleaning),
        ("MANTENIMIENTO", Maintenance),
        ("MANTENIMIENTO PREVENTIVO", Maintenance),
        ("IMP-MANT", Maintenance),
        ("REUNION", Meeting),
        ("REUNIÓN", Meeting),
        ("IMP-REU", Meeting),
        ("FORMACION", Training),
        ("FORMACIÓN", Training),
        ("IMP-FORM", Training),
        ("ESPERA MATERIAL", Waiting),
        ("ESPERA", Waiting),
        ("IMP-ESP", Waiting),
        ("AVERIA", Breakdown),
        ("AVERÍA", Breakdown),
        ("IMP-AVE", Breakdown),
        ("INVENTARIO", Inventory),
        ("IMP-INV", Inventory),
        ("REPROCESO", Rework),
        ("RETRABAJO", Rework),
        ("IMP-RET", Rework),
        ("PREPARACION MAQUINA", Setup),
        ("PREPARACIÓN MÁQUINA", Setup),
        ("IMP-PREP", Setup),
    ])
});

fn normalize_article(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Improductive category of an article, if it has one.
pub fn classify(code: &str) -> Option<ImproductiveKind> {
    IMPRODUCTIVE_ARTICLES
        .get(normalize_article(code).as_str())
        .copied()
}

pub fn is_improductive(code: &str) -> bool {
    classify(code).is_some()
}

/// Number of known improductive article codes.
pub fn known_articles() -> usize {
    IMPRODUCTIVE_ARTICLES.len()
}
