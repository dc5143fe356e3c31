use thiserror::Error;

#[derive(Debug, Error)]
pub enum HintError {
    /// A field the extractor has to read is absent from the input.
    #[error("Missing field `{field}` on {element}")]
    MissingField {
        field: &'static str,
        element: String,
    },

    #[error("BioC JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HintError {
    pub fn missing(field: &'static str, element: impl Into<String>) -> Self {
        HintError::MissingField { field, element: element.into() }
    }
}

pub type Result<T> = std::result::Result<T, HintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field_and_element() {
        let err = HintError::missing("infons.type", "document 123 / passage 0 / annotation T1");
        assert_eq!(
            err.to_string(),
            "Missing field `infons.type` on document 123 / passage 0 / annotation T1"
        );
    }

    #[test]
    fn test_decode_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HintError = json_err.into();
        assert!(matches!(err, HintError::Decode(_)));
    }
}
