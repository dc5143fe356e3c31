//! biohint-ingestion — PubTator BioC documents in, entity hints out.
//! - BioC JSON models (collection, document, passage, annotation)
//! - Order-preserving deduplication
//! - Hint extraction for title and abstract passages

pub mod dedup;
pub mod models;
pub mod pubtator;

pub use models::{BiocAnnotation, BiocCollection, BiocDocument, BiocInput, BiocPassage};
pub use pubtator::{
    document_hints, hints_from_collection, hints_from_document, hints_from_documents,
    DocumentHints,
};
