//! BioC JSON data model, as exported by PubTator.
//! See the NLM BioC DTD: collection → document → passage → annotation.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Read;

use biohint_common::{Result, Section};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// BioC `infons`: free-form key/value metadata.
/// Values are kept as raw JSON so that presence, `null` and numbers stay
/// distinguishable.
pub type Infons = BTreeMap<String, Value>;

// Only passage/annotation `infons` and annotation `text` are read by
// extraction. Everything else is decoded leniently: a field of the wrong
// shape falls back to its default instead of failing the whole file.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiocCollection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient_infons")]
    pub infons: Infons,
    pub documents: Vec<BiocDocument>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiocDocument {
    /// PubMed ids sometimes arrive as JSON numbers; kept as text.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_infons")]
    pub infons: Infons,
    pub passages: Vec<BiocPassage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relations: Vec<Value>,
}

impl BiocDocument {
    /// DOI recorded by PubTator in the document infons, if any.
    pub fn doi(&self) -> Option<&str> {
        infon_str(&self.infons, "doi")
    }

    /// Name used in log lines and error messages.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiocPassage {
    #[serde(default, deserialize_with = "lenient_infons")]
    pub infons: Infons,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub offset: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Vec<BiocAnnotation>,
}

impl BiocPassage {
    /// Raw `infons.type` section marker.
    pub fn section_label(&self) -> Option<&str> {
        infon_str(&self.infons, "type")
    }

    /// `Some` only for passages that contribute hints (title, abstract).
    pub fn section(&self) -> Option<Section> {
        self.section_label().and_then(Section::from_label)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiocAnnotation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_infons")]
    pub infons: Infons,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_locations")]
    pub locations: Vec<BiocLocation>,
}

impl BiocAnnotation {
    /// Entity kind label (`infons.type`), e.g. "Gene" or "DNAMutation".
    pub fn entity_label(&self) -> Option<&str> {
        infon_str(&self.infons, "type")
    }

    /// Database identifier (`infons.identifier`).
    ///
    /// Numbers are rendered as their JSON text so `1017` and `"1017"` agree.
    /// `null` counts as absent.
    pub fn identifier(&self) -> Option<Cow<'_, str>> {
        match self.infons.get("identifier")? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BiocLocation {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub offset: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub length: Option<u64>,
}

fn infon_str<'a>(infons: &'a Infons, key: &str) -> Option<&'a str> {
    infons.get(key).and_then(Value::as_str)
}

// ── Lenient field decoders ───────────────────────────────────────────────────

type DeResult<T, E> = std::result::Result<T, E>;

/// Object → map; `null` or any other shape → empty.
fn lenient_infons<'de, D: Deserializer<'de>>(d: D) -> DeResult<Infons, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Object(map)) => map.into_iter().collect(),
        _ => Infons::new(),
    })
}

/// String as-is, number as its JSON text, anything else → `None`.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> DeResult<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Unsigned integer, or a string holding one; anything else → `None`.
fn lenient_u64<'de, D: Deserializer<'de>>(d: D) -> DeResult<Option<u64>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Locations that are not objects are skipped.
fn lenient_locations<'de, D: Deserializer<'de>>(d: D) -> DeResult<Vec<BiocLocation>, D::Error> {
    let values: Vec<Value> = null_as_default(d)?;
    Ok(values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

fn null_as_default<'de, D, T>(d: D) -> DeResult<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Input envelope
// ---------------------------------------------------------------------------

/// Any of the shapes PubTator hands out: a collection, a bare array of
/// documents, or a single document.
#[derive(Debug, Clone)]
pub enum BiocInput {
    Collection(BiocCollection),
    Documents(Vec<BiocDocument>),
    Document(BiocDocument),
}

impl BiocInput {
    pub fn from_value(value: Value) -> Result<Self> {
        let input = if value.is_array() {
            BiocInput::Documents(serde_json::from_value(value)?)
        } else if value.get("documents").is_some() {
            BiocInput::Collection(serde_json::from_value(value)?)
        } else {
            BiocInput::Document(serde_json::from_value(value)?)
        };
        Ok(input)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn into_documents(self) -> Vec<BiocDocument> {
        match self {
            BiocInput::Collection(collection) => collection.documents,
            BiocInput::Documents(documents) => documents,
            BiocInput::Document(document) => vec![document],
        }
    }
}
