use crate::RequestUploads;

/// Converts the uploads of a request into a typed value for a named field.
///
/// Binders are registered to an `UploadBinderRegistry` by their `Output` type.
pub trait UploadBinder: Send + Sync + 'static {
    type Output: Send + 'static;

    fn bind(&self, field_name: &str, uploads: &RequestUploads) -> Self::Output;
}
