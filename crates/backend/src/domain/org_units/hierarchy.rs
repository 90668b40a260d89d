//! Static organizational hierarchy: direction -> immediate departments.
//!
//! Hand-authored configuration data, not derived from the workbook. Each
//! entry maps a unit directly to its immediate children; sub-directions
//! (DGA Management, the technical directions, ...) appear both as children
//! and as keys of their own.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use contracts::shared::table::Table;

/// `Direction` column of the position sheet
pub const DIRECTION_COLUMN: &str = "Direction";
/// `Département` column of the position sheet
pub const DEPARTMENT_COLUMN: &str = "Département";

static DIRECTIONS: &[(&str, &[&str])] = &[
    (
        "Direction Générale",
        &[
            "Conseiller DG",
            "Direction des affaires juridiques et promotion",
            "DGA Management",
            "DGA Technique",
            "Cellule environnement",
            "Cellule audit et organisation",
            "Cellule analyse des marchés énergie",
        ],
    ),
    (
        "DGA Management",
        &[
            "Direction des ressources humaines",
            "Direction administrative et financière",
            "Direction du patrimoine et logistique",
            "Direction système d’information",
        ],
    ),
    (
        "DGA Technique",
        &[
            "Direction mine et forage",
            "Direction des hydrocarbures",
            "Direction laboratoire",
        ],
    ),
    (
        "Direction des affaires juridiques et promotion",
        &[
            "AD Direction des affaires juridiques et promotion",
            "Département stratégie",
            "Département juridique",
            "Département promotion",
            "Département communication",
        ],
    ),
    ("Cellule audit et organisation", &["Auditeur"]),
    (
        "Cellule analyse des marchés énergie",
        &["Responsable suivi et évaluation des projets"],
    ),
    (
        "Direction des ressources humaines",
        &[
            "AD Direction des ressources humaines",
            "Département Administration du personnel",
            "Département socio-culturel et événementiel",
            "Département Paie",
            "Département Gestion des carrières et compétences",
            "Département Sécurité",
            "Cellule médecin et conseil",
        ],
    ),
    (
        "Direction administrative et financière",
        &[
            "AD Direction administrative et financière",
            "Département Analytique et budget",
            "Département Trésorerie et finance",
            "Département Comptabilité générale",
        ],
    ),
    (
        "Direction du patrimoine et logistique",
        &[
            "AD Direction du patrimoine et logistique",
            "Département Approvisionnements",
            "Département Magasins généraux",
            "Département Transport et maintenance",
            "Département Affaires extérieures",
        ],
    ),
    (
        "Direction système d’information",
        &[
            "AD Direction système d’information",
            "Département Études",
            "Département Administration réseaux, serveurs et architecture",
            "Département Parc informatique et support",
        ],
    ),
    (
        "Direction mine et forage",
        &[
            "AD Direction mine et forage",
            "Département Suivi exploration minière",
            "Département Base de données",
            "Département Gestion du portefeuille minier",
            "Département Forage et prestations",
            "Département Études économiques et financières",
        ],
    ),
    (
        "Direction des hydrocarbures",
        &[
            "AD Direction des hydrocarbures",
            "Département Étude bassin Morondava",
            "Département Étude bassin Nord et côte Est",
            "Département Suivi HSE",
            "Département Gestion de la base de données",
        ],
    ),
    (
        "Direction laboratoire",
        &[
            "AD Direction laboratoire",
            "Département Gestion administration et projets",
            "Département Contrôle qualité",
            "Département Pétrologie sédimentaire",
            "Département Analyses",
            "Département Géochimie physico-chimie",
            "Département Traitement",
        ],
    ),
];

static CHILDREN_INDEX: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| DIRECTIONS.iter().copied().collect());

/// Immediate children of a unit; empty for unknown names.
pub fn children_of(direction: &str) -> &'static [&'static str] {
    CHILDREN_INDEX.get(direction).copied().unwrap_or(&[])
}

/// Departments offered for a direction selection.
///
/// With no direction selected, every distinct department present in the
/// position sheet is offered, sorted ascending. With a direction selected,
/// the static children list is offered as-is; departments absent from the
/// data simply match nothing downstream.
pub fn selectable_departments(direction: Option<&str>, position: &Table) -> Vec<String> {
    match direction {
        None => position.distinct_values(DEPARTMENT_COLUMN),
        Some(name) => children_of(name).iter().map(|s| s.to_string()).collect(),
    }
}
