use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] pubtag_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use pubtag_operations::OperationError;

    use super::CliError;

    #[test]
    fn operation_error_converts_via_from() {
        let op_err = OperationError::PublishFailed {
            spec: "foo@1.0.0".to_string(),
            status: "exit status: 1".to_string(),
        };

        let cli_err: CliError = op_err.into();

        assert!(matches!(cli_err, CliError::Operation(_)));
        assert!(cli_err.to_string().contains("foo@1.0.0"));
    }

    #[test]
    fn current_dir_error_has_source_chain() {
        let err = CliError::CurrentDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "deleted",
        ));

        let source = std::error::Error::source(&err);

        assert!(source.is_some());
    }
}
