use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// No uploads have been attached to the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingContextError;

impl Display for MissingContextError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(
            "The uploads of the current request cannot be found. Maybe the binder is invoked \
             outside of a multipart/form-data request.",
        )
    }
}

impl Error for MissingContextError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadBindingError {
    MissingContextError,
    /// No binder is registered for the requested type. The type name is attached.
    NoBinderError(&'static str),
}

impl From<MissingContextError> for UploadBindingError {
    #[inline]
    fn from(_: MissingContextError) -> UploadBindingError {
        UploadBindingError::MissingContextError
    }
}

impl Display for UploadBindingError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            UploadBindingError::MissingContextError => Display::fmt(&MissingContextError, f),
            UploadBindingError::NoBinderError(type_name) => {
                f.write_fmt(format_args!("There is no binder registered for `{}`.", type_name))
            },
        }
    }
}

impl Error for UploadBindingError {}
