use std::{slice, sync::Arc};

use rocket::{
    http::Status,
    request::{self, FromRequest, Request},
};

use crate::{MissingContextError, Upload};

/// The uploads parsed from the body of one request, in the order they were sent.
///
/// The set is read-only once it has been created. It is attached to a request by whatever parses
/// the multipart body, and it is dropped together with the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestUploads {
    uploads: Vec<Arc<Upload>>,
}

// Private, so nothing outside this module can fill the cache slot.
struct UploadsSlot(Option<RequestUploads>);

impl RequestUploads {
    #[inline]
    pub fn new(uploads: Vec<Upload>) -> RequestUploads {
        uploads.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.uploads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Arc<Upload>> {
        self.uploads.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Arc<Upload>] {
        self.uploads.as_slice()
    }

    /// Attach this set to `request`. A request can only get its uploads once, so `false` is
    /// returned (and the set is dropped) if the request has already been looked up or attached.
    pub fn attach(self, request: &Request<'_>) -> bool {
        let mut attached = false;

        request.local_cache(|| {
            attached = true;

            UploadsSlot(Some(self))
        });

        if !attached {
            warn!("The uploads of `{}` have already been settled. Ignore the new ones.", request.uri());
        }

        attached
    }

    /// Get the uploads attached to `request`.
    #[inline]
    pub fn current<'r>(request: &'r Request<'_>) -> Result<&'r RequestUploads, MissingContextError> {
        request.local_cache(|| UploadsSlot(None)).0.as_ref().ok_or(MissingContextError)
    }
}

impl std::iter::FromIterator<Upload> for RequestUploads {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Upload>>(iter: I) -> Self {
        RequestUploads {
            uploads: iter.into_iter().map(Arc::new).collect()
        }
    }
}

impl<'a> IntoIterator for &'a RequestUploads {
    type IntoIter = slice::Iter<'a, Arc<Upload>>;
    type Item = &'a Arc<Upload>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for &'r RequestUploads {
    type Error = MissingContextError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match RequestUploads::current(request) {
            Ok(uploads) => request::Outcome::Success(uploads),
            Err(err) => {
                error!("{} ({} {})", err, request.method(), request.uri());

                request::Outcome::Error((Status::InternalServerError, err))
            },
        }
    }
}
