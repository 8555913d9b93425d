use std::fmt::{
    Arguments,
    Display,
};

use anyhow::Error;
use thiserror::Error;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A lookup that produced no value.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).into()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).into()
}

/// Wraps a result into a [`Result<T, Error>`], optionally providing additional context.
pub trait WrapResultError<T> {
    /// Wraps the error into an [`struct@Error`].
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    /// Wraps the error into an [`struct@Error`], with an additional message.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Wraps the error into an [`struct@Error`], with an additional formatted message.
    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error>;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error> {
        self.map_err(Into::into)
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.map_err(|error| error.into().context(message.to_string()))
    }

    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.wrap_error_with_message(format!("{args}"))
    }
}

/// Wraps an [`Option`] into a result producing an [`struct@Error`].
pub trait WrapOptionError<T> {
    /// Wraps the missing value into an [`struct@Error`] with the given message.
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Wraps the missing value into an [`struct@Error`] with a formatted message.
    #[track_caller]
    fn wrap_expectation_with_format(self, args: Arguments<'_>) -> Result<T, Error>;

    /// Wraps the missing value into a [`NotFoundError`] for the given target.
    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display;

    /// Wraps the missing value into a [`NotFoundError`] for a formatted target.
    #[track_caller]
    fn wrap_not_found_error_with_format(self, args: Arguments<'_>) -> Result<T, Error>;
}

impl<T> WrapOptionError<T> for Option<T> {
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| general_error(message))
    }

    #[track_caller]
    fn wrap_expectation_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.wrap_expectation(format!("{args}"))
    }

    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| not_found_error(target))
    }

    #[track_caller]
    fn wrap_not_found_error_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.wrap_not_found_error(format!("{args}"))
    }
}
