use anyhow::Error;

/// [`assert`]s that the result is an [`Error`] with the given message.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("result is not an error"),
        Err(error) => pretty_assertions::assert_eq!(error.to_string(), message),
    }
}

/// [`assert`]s that the result is an [`Error`] that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("result is not an error"),
        Err(error) => {
            let got = format!("{error:#}");
            assert!(got.contains(message), "{got:?} does not contain {message:?}");
        }
    }
}
