//! Hints from PubTator BioC documents.
//!
//! PubTator annotation types originate from the tmVar 3.0 concept
//! recognition tool. For every title/abstract passage:
//!
//! 1. collapse annotations sharing `(infons.type, infons.identifier)`, first wins
//! 2. drop annotations of an unrecognised kind or without an identifier
//! 3. map the rest to [`Hint`]s tagged with the passage section
//!
//! Other passages (methods, results, untyped …) contribute nothing.
//! Deduplication is per passage: a document with several abstract passages
//! can repeat an xref within the abstract section.

use std::borrow::Cow;

use biohint_common::{EntityKind, Hint, HintError, Result, Section};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dedup::try_unique_by;
use crate::models::{BiocAnnotation, BiocCollection, BiocDocument, BiocPassage};

/// Hints for one document of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHints {
    pub document: Option<String>,
    pub doi: Option<String>,
    pub hints: Vec<Hint>,
}

/// Map a PubTator BioC document to its hints.
///
/// Fails only on structurally broken input: an annotation in a title or
/// abstract passage without `infons.type`, or a kept annotation without
/// `text`.
pub fn hints_from_document(document: &BiocDocument) -> Result<Vec<Hint>> {
    let mut hints = Vec::new();

    for (index, passage) in document.passages.iter().enumerate() {
        let Some(section) = passage.section() else {
            trace!(
                document = document.label(),
                passage = index,
                section = passage.section_label().unwrap_or("<unset>"),
                "Skipping passage"
            );
            continue;
        };
        hints.extend(passage_hints(document, index, passage, section)?);
    }

    debug!(document = document.label(), hints = hints.len(), "Extracted hints");
    Ok(hints)
}

fn passage_hints(
    document: &BiocDocument,
    index: usize,
    passage: &BiocPassage,
    section: Section,
) -> Result<Vec<Hint>> {
    let locate = |position: usize, annotation: &BiocAnnotation| {
        let annotation = match &annotation.id {
            Some(id) => id.clone(),
            None => format!("#{position}"),
        };
        format!("document {} / passage {index} / annotation {annotation}", document.label())
    };

    let unique = try_unique_by(passage.annotations.iter().enumerate(), |&(position, annotation)| {
        xref_key(annotation).ok_or_else(|| HintError::missing("infons.type", locate(position, annotation)))
    })?;
    let duplicates = passage.annotations.len() - unique.len();

    let mut hints = Vec::with_capacity(unique.len());
    for (position, annotation) in unique {
        let Some((kind, id)) = recognise(annotation) else {
            trace!(
                document = document.label(),
                passage = index,
                kind = annotation.entity_label().unwrap_or_default(),
                "Dropping unrecognised or unlinked annotation"
            );
            continue;
        };
        let text = annotation
            .text
            .as_deref()
            .ok_or_else(|| HintError::missing("text", locate(position, annotation)))?;

        hints.push(Hint {
            text: text.to_string(),
            hint_type: kind.hint_type(),
            xref: kind.xref(id),
            section,
        });
    }

    debug!(
        document = document.label(),
        section = section.as_str(),
        annotations = passage.annotations.len(),
        duplicates,
        hints = hints.len(),
        "Passage processed"
    );
    Ok(hints)
}

/// Dedup key: raw entity label plus identifier (if any).
fn xref_key(annotation: &BiocAnnotation) -> Option<(&str, Option<Cow<'_, str>>)> {
    Some((annotation.entity_label()?, annotation.identifier()))
}

/// Recognised kind and identifier, or `None` if the annotation is not hintable.
fn recognise(annotation: &BiocAnnotation) -> Option<(EntityKind, Cow<'_, str>)> {
    let kind = EntityKind::from_label(annotation.entity_label()?)?;
    let id = annotation.identifier()?;
    Some((kind, id))
}

/// Hints for one document, with its id and DOI attached.
pub fn document_hints(document: &BiocDocument) -> Result<DocumentHints> {
    Ok(DocumentHints {
        document: document.id.clone(),
        doi: document.doi().map(String::from),
        hints: hints_from_document(document)?,
    })
}

/// Hints for every document, in input order.
///
/// With the `parallel` feature documents are processed on the rayon pool.
/// If several documents are malformed, which error is reported is then
/// unspecified.
pub fn hints_from_documents(documents: &[BiocDocument]) -> Result<Vec<DocumentHints>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        documents.par_iter().map(document_hints).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        documents.iter().map(document_hints).collect()
    }
}

pub fn hints_from_collection(collection: &BiocCollection) -> Result<Vec<DocumentHints>> {
    debug!(
        source = collection.source.as_deref().unwrap_or_default(),
        documents = collection.documents.len(),
        "Extracting hints from collection"
    );
    hints_from_documents(&collection.documents)
}
