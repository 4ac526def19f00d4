use thiserror::Error;

/// Everything that can end a spreadsheet request early. Each variant maps to exactly one HTTP status.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("no spreadsheet ID provided")]
    MissingId,
    #[error("unable to find spreadsheet with id: {0}")]
    NotFound(String),
    #[error("longitude and/or latitude columns are missing or not properly named")]
    InvalidSchema,
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    MalformedFeed(String),
}

impl SheetError {
    pub fn status_code(&self) -> u16 {
        match self {
            SheetError::MissingId | SheetError::InvalidSchema => 400,
            SheetError::NotFound(_) => 404,
            SheetError::Transport(_) | SheetError::MalformedFeed(_) => 502,
        }
    }
}

impl From<serde_json::Error> for SheetError {
    fn from(err: serde_json::Error) -> Self {
        SheetError::MalformedFeed(err.to_string())
    }
}

pub type SheetResult<T> = Result<T, SheetError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::SheetError;

    #[rstest]
    #[case(SheetError::MissingId, 400)]
    #[case(SheetError::InvalidSchema, 400)]
    #[case(SheetError::NotFound("abc".to_string()), 404)]
    #[case(SheetError::MalformedFeed("bad".to_string()), 502)]
    fn test_status_code(#[case] error: SheetError, #[case] expected_status: u16) {
        assert_eq!(expected_status, error.status_code());
    }

    #[test]
    fn test_not_found_message_carries_id() {
        let error = SheetError::NotFound("invalid-id-123".to_string());
        assert_eq!(
            "unable to find spreadsheet with id: invalid-id-123",
            error.to_string()
        );
    }

    #[test]
    fn test_json_error_is_malformed_feed() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = SheetError::from(json_error);
        assert!(matches!(error, SheetError::MalformedFeed(_)));
        assert_eq!(502, error.status_code());
    }
}
