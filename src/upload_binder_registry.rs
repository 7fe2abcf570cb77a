use std::{
    any::{self, Any, TypeId},
    collections::HashMap,
    fmt::{self, Debug, Formatter},
};

use rocket::Request;

use crate::{RequestUploads, UploadBinder, UploadBindingError, UploadSelector, UploadSetSelector};

trait ErasedUploadBinder: Send + Sync {
    fn bind_any(&self, field_name: &str, uploads: &RequestUploads) -> Box<dyn Any>;

    fn binder_name(&self) -> &'static str;
}

impl<B: UploadBinder> ErasedUploadBinder for B {
    #[inline]
    fn bind_any(&self, field_name: &str, uploads: &RequestUploads) -> Box<dyn Any> {
        Box::new(self.bind(field_name, uploads))
    }

    #[inline]
    fn binder_name(&self) -> &'static str {
        any::type_name::<B>()
    }
}

/// Binders looked up by the type they produce. Build it before launching and put it into the
/// managed state of Rocket.
#[derive(Default)]
pub struct UploadBinderRegistry {
    binders: HashMap<TypeId, Box<dyn ErasedUploadBinder>>,
}

impl UploadBinderRegistry {
    /// Create an empty `UploadBinderRegistry` instance.
    #[inline]
    pub fn new() -> UploadBinderRegistry {
        UploadBinderRegistry::default()
    }

    /// Create an `UploadBinderRegistry` instance which can bind `UploadArray` and `Option<Arc<Upload>>`.
    #[inline]
    pub fn with_default_binders() -> UploadBinderRegistry {
        UploadBinderRegistry::new().register(UploadSetSelector).register(UploadSelector)
    }

    /// Register a binder for its output type. A binder registered earlier for the same type is replaced.
    pub fn register<B: UploadBinder>(mut self, binder: B) -> UploadBinderRegistry {
        if self.binders.insert(TypeId::of::<B::Output>(), Box::new(binder)).is_some() {
            debug!("Replaced the binder for `{}`.", any::type_name::<B::Output>());
        }

        self
    }

    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.binders.contains_key(&TypeId::of::<T>())
    }

    /// Bind the uploads of `field_name` to `T`.
    pub fn bind<T: 'static>(
        &self,
        field_name: &str,
        uploads: &RequestUploads,
    ) -> Result<T, UploadBindingError> {
        let no_binder = || UploadBindingError::NoBinderError(any::type_name::<T>());

        let binder = self.binders.get(&TypeId::of::<T>()).ok_or_else(no_binder)?;

        binder.bind_any(field_name, uploads).downcast::<T>().map(|value| *value).map_err(|_| no_binder())
    }

    /// Bind the uploads of `field_name` attached to `request` to `T`.
    #[inline]
    pub fn bind_current<T: 'static>(
        &self,
        request: &Request<'_>,
        field_name: &str,
    ) -> Result<T, UploadBindingError> {
        let uploads = RequestUploads::current(request)?;

        self.bind(field_name, uploads)
    }
}

impl Debug for UploadBinderRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_list().entries(self.binders.values().map(|binder| binder.binder_name())).finish()
    }
}
