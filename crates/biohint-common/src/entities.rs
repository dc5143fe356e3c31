//! Entity kinds recognised from PubTator annotations and the normalised
//! hint records built from them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity kind (PubTator / tmVar 3.0 annotation type)
// ---------------------------------------------------------------------------

/// Annotation types we turn into hints.
///
/// tmVar also emits mutation kinds (`DNAMutation`, `ProteinMutation`, `SNP`,
/// `DNAAllele`, `ProteinAllele`, `AcidChange`, `OtherMutation`); those have no
/// variant here and are dropped by [`EntityKind::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Gene,
    Species,
    Chemical,
    Disease,
    CellLine,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Gene,
        EntityKind::Species,
        EntityKind::Chemical,
        EntityKind::Disease,
        EntityKind::CellLine,
    ];

    /// Parse the `infons.type` label of a BioC annotation.
    /// Exact, case-sensitive match; anything else is unrecognised.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Gene"     => Some(EntityKind::Gene),
            "Species"  => Some(EntityKind::Species),
            "Chemical" => Some(EntityKind::Chemical),
            "Disease"  => Some(EntityKind::Disease),
            "CellLine" => Some(EntityKind::CellLine),
            _          => None,
        }
    }

    /// The label as it appears in PubTator output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Gene     => "Gene",
            EntityKind::Species  => "Species",
            EntityKind::Chemical => "Chemical",
            EntityKind::Disease  => "Disease",
            EntityKind::CellLine => "CellLine",
        }
    }

    pub fn hint_type(&self) -> HintType {
        match self {
            EntityKind::Gene     => HintType::Ggp,
            EntityKind::Species  => HintType::Organism,
            EntityKind::Chemical => HintType::Chemical,
            EntityKind::Disease  => HintType::Disease,
            EntityKind::CellLine => HintType::CellLine,
        }
    }

    /// Human-readable name of the database the identifier belongs to.
    pub fn db_name(&self) -> &'static str {
        match self {
            EntityKind::Gene     => "NCBI Gene",
            EntityKind::Species  => "NCBI Taxonomy",
            EntityKind::Chemical => "ChEBI",
            EntityKind::Disease  => "MeSH",
            EntityKind::CellLine => "Cellosaurus",
        }
    }

    /// Namespace prefix of the identifier (identifiers.org style).
    pub fn db_prefix(&self) -> &'static str {
        match self {
            EntityKind::Gene     => "NCBIGene",
            EntityKind::Species  => "taxonomy",
            EntityKind::Chemical => "CHEBI",
            EntityKind::Disease  => "mesh",
            EntityKind::CellLine => "cellosaurus",
        }
    }

    /// Cross-reference for an identifier of this kind.
    pub fn xref(&self, id: impl Into<String>) -> Xref {
        Xref {
            db_name: self.db_name().to_string(),
            db_prefix: self.db_prefix().to_string(),
            id: id.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Hint type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintType {
    /// Gene or gene product
    #[serde(rename = "ggp")]
    Ggp,
    #[serde(rename = "chemical")]
    Chemical,
    #[serde(rename = "disease")]
    Disease,
    #[serde(rename = "cellLine")]
    CellLine,
    #[serde(rename = "organism")]
    Organism,
}

impl HintType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HintType::Ggp      => "ggp",
            HintType::Chemical => "chemical",
            HintType::Disease  => "disease",
            HintType::CellLine => "cellLine",
            HintType::Organism => "organism",
        }
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// Passage kinds that contribute hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Title,
    Abstract,
}

impl Section {
    /// Parse a passage `infons.type`. Only `title` and `abstract` are kept.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "title"    => Some(Section::Title),
            "abstract" => Some(Section::Abstract),
            _          => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Title    => "title",
            Section::Abstract => "abstract",
        }
    }
}

// ---------------------------------------------------------------------------
// Hint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Xref {
    pub db_name: String,
    pub db_prefix: String,
    pub id: String,
}

/// One recognised, cross-referenced entity mention within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub text: String,
    #[serde(rename = "type")]
    pub hint_type: HintType,
    pub xref: Xref,
    pub section: Section,
}

impl Hint {
    /// Key used for per-section uniqueness.
    pub fn xref_key(&self) -> (&str, &str) {
        (&self.xref.db_prefix, &self.xref.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_kind_round_trips_its_label() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_label(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_mutation_kinds_are_unrecognised() {
        for label in ["DNAMutation", "ProteinMutation", "SNP", "DNAAllele",
                      "ProteinAllele", "AcidChange", "OtherMutation"] {
            assert_eq!(EntityKind::from_label(label), None, "{label} should be dropped");
        }
        // case-sensitive
        assert_eq!(EntityKind::from_label("gene"), None);
    }

    #[test]
    fn test_kind_tables() {
        assert_eq!(EntityKind::Gene.hint_type(), HintType::Ggp);
        assert_eq!(EntityKind::Species.hint_type(), HintType::Organism);
        assert_eq!(EntityKind::CellLine.hint_type().as_str(), "cellLine");
        assert_eq!(EntityKind::Disease.db_prefix(), "mesh");
        assert_eq!(EntityKind::Species.db_name(), "NCBI Taxonomy");
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::from_label("title"), Some(Section::Title));
        assert_eq!(Section::from_label("abstract"), Some(Section::Abstract));
        assert_eq!(Section::from_label("methods"), None);
        assert_eq!(Section::from_label("Title"), None);
    }

    #[test]
    fn test_hint_serializes_with_bioc_field_names() {
        let hint = Hint {
            text: "water".to_string(),
            hint_type: EntityKind::Chemical.hint_type(),
            xref: EntityKind::Chemical.xref("15377"),
            section: Section::Title,
        };
        let value = serde_json::to_value(&hint).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "water",
                "type": "chemical",
                "xref": { "dbName": "ChEBI", "dbPrefix": "CHEBI", "id": "15377" },
                "section": "title"
            })
        );
    }
}
