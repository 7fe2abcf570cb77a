use std::{path::PathBuf, str::FromStr, sync::Arc};

use crate::mime::Mime;

/// One file uploaded through a field of a multipart/form-data request.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub field_name:   Arc<str>,
    pub file_name:    Option<String>,
    pub content_type: Option<Mime>,
    pub path:         PathBuf,
    pub size:         u64,
}

impl Upload {
    /// Create an `Upload` instance for a file which has been stored at `path`.
    #[inline]
    pub fn new<N: Into<Arc<str>>, P: Into<PathBuf>>(field_name: N, path: P) -> Upload {
        Upload {
            field_name:   field_name.into(),
            file_name:    None,
            content_type: None,
            path:         path.into(),
            size:         0,
        }
    }

    /// Set the file name sent by the client.
    ///
    /// `None` needs a type, e.g. `file_name(None::<String>)`.
    #[inline]
    pub fn file_name<S: Into<String>>(mut self, file_name: Option<S>) -> Upload {
        self.file_name = file_name.map(Into::into);
        self
    }

    /// Set the content type sent by the client.
    #[inline]
    pub fn content_type(mut self, content_type: Option<Mime>) -> Upload {
        self.content_type = content_type;
        self
    }

    /// Set the content type sent by the client by parsing a string.
    ///
    /// `None` needs a type, e.g. `content_type_by_string(None::<&str>)`.
    pub fn content_type_by_string<S: AsRef<str>>(
        mut self,
        content_type: Option<S>,
    ) -> Result<Upload, mime::FromStrError> {
        self.content_type = match content_type {
            Some(content_type) => Some(Mime::from_str(content_type.as_ref())?),
            None => None,
        };

        Ok(self)
    }

    /// Set the number of bytes of this file.
    #[inline]
    pub fn size(mut self, size: u64) -> Upload {
        self.size = size;
        self
    }
}
