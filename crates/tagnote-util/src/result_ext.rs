use std::fmt::Display;

pub trait ResultExt<T, E> {
    /// Replace the error with a string carrying variant built from its `Display` output
    ///
    /// ```rust
    /// use tagnote_util::result_ext::ResultExt as _;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum LengthError {
    ///     #[error("not a length: {0}")]
    ///     Invalid(String),
    /// }
    ///
    /// let parsed: Result<u8, LengthError> = "300".parse::<u8>().map_err_str(LengthError::Invalid);
    /// assert!(matches!(parsed, Err(LengthError::Invalid(_))));
    /// ```
    fn map_err_str<F, Mapped>(self, to_error: F) -> Result<T, Mapped>
    where
        E: Display,
        F: FnOnce(String) -> Mapped;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_err_str<F, Mapped>(self, to_error: F) -> Result<T, Mapped>
    where
        E: Display,
        F: FnOnce(String) -> Mapped,
    {
        self.map_err(|error| to_error(error.to_string()))
    }
}
