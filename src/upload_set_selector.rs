use std::sync::Arc;

use rocket::Request;

use crate::{MissingContextError, RequestUploads, Upload, UploadArray, UploadBinder};

/// Binds all uploads of a field, e.g. from `<input type="file" multiple>`, to an `UploadArray`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadSetSelector;

impl UploadSetSelector {
    /// Select the uploads whose field name is exactly `field_name`, keeping their order.
    pub fn select(field_name: &str, current_uploads: &RequestUploads) -> UploadArray {
        let selected: Vec<Arc<Upload>> = current_uploads
            .iter()
            .filter(|upload| upload.field_name.as_ref() == field_name)
            .cloned()
            .collect();

        debug!(
            "Selected {} of {} uploads for field `{}`.",
            selected.len(),
            current_uploads.len(),
            field_name
        );

        UploadArray::from(selected)
    }

    /// Select from the uploads attached to `request`.
    #[inline]
    pub fn select_current(
        field_name: &str,
        request: &Request<'_>,
    ) -> Result<UploadArray, MissingContextError> {
        RequestUploads::current(request).map(|uploads| Self::select(field_name, uploads))
    }
}

impl UploadBinder for UploadSetSelector {
    type Output = UploadArray;

    #[inline]
    fn bind(&self, field_name: &str, uploads: &RequestUploads) -> UploadArray {
        Self::select(field_name, uploads)
    }
}

/// Binds the first upload of a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadSelector;

impl UploadSelector {
    #[inline]
    pub fn select(field_name: &str, current_uploads: &RequestUploads) -> Option<Arc<Upload>> {
        current_uploads.iter().find(|upload| upload.field_name.as_ref() == field_name).cloned()
    }
}

impl UploadBinder for UploadSelector {
    type Output = Option<Arc<Upload>>;

    #[inline]
    fn bind(&self, field_name: &str, uploads: &RequestUploads) -> Option<Arc<Upload>> {
        Self::select(field_name, uploads)
    }
}
