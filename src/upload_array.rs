use std::{ops::Deref, slice, sync::Arc, vec};

use crate::Upload;

/// An immutable, ordered sequence of uploads bound from one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadArray {
    uploads: Box<[Arc<Upload>]>,
}

impl UploadArray {
    #[inline]
    pub fn into_vec(self) -> Vec<Arc<Upload>> {
        self.uploads.into_vec()
    }
}

impl From<Vec<Arc<Upload>>> for UploadArray {
    #[inline]
    fn from(uploads: Vec<Arc<Upload>>) -> Self {
        UploadArray {
            uploads: uploads.into_boxed_slice()
        }
    }
}

impl Deref for UploadArray {
    type Target = [Arc<Upload>];

    #[inline]
    fn deref(&self) -> &[Arc<Upload>] {
        &self.uploads
    }
}

impl IntoIterator for UploadArray {
    type IntoIter = vec::IntoIter<Arc<Upload>>;
    type Item = Arc<Upload>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a UploadArray {
    type IntoIter = slice::Iter<'a, Arc<Upload>>;
    type Item = &'a Arc<Upload>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.uploads.iter()
    }
}
