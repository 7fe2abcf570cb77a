/*!
# Upload Binders for Rocket Framework

This crate provides binders which pick the uploaded files of a multipart/form-data request by their field name for the Rocket framework. It does not parse the request body. Whatever parses it hands the uploads over with `RequestUploads::attach`, and the handlers get them back with the `&RequestUploads` request guard.

## Example

```rust
extern crate rocket_upload_binder;

use std::sync::Arc;

use rocket_upload_binder::{
    RequestUploads, Upload, UploadArray, UploadBinderRegistry, UploadSetSelector,
};

let uploads = RequestUploads::new(vec![
    Upload::new("photo", "/tmp/rs-1").file_name(Some("a.png")).size(1024),
    Upload::new("doc", "/tmp/rs-2").file_name(Some("b.pdf")),
    Upload::new("photo", "/tmp/rs-3").file_name(Some("c.png")),
]);

let photos = UploadSetSelector::select("photo", &uploads);

assert_eq!(2, photos.len());
assert_eq!(Some("a.png"), photos[0].file_name.as_deref());
assert_eq!(Some("c.png"), photos[1].file_name.as_deref());

// The same thing through a registry, which is usually put into the managed state of Rocket.
let binders = UploadBinderRegistry::with_default_binders();

let photos: UploadArray = binders.bind("photo", &uploads).unwrap();
let doc: Option<Arc<Upload>> = binders.bind("doc", &uploads).unwrap();

assert_eq!(2, photos.len());
assert_eq!(Some("b.pdf"), doc.unwrap().file_name.as_deref());
```

Field names are compared exactly, so `"FILE"` does not select the uploads of `"file"`.
*/

pub extern crate mime;

#[macro_use]
extern crate log;

mod request_uploads;
mod upload;
mod upload_array;
mod upload_binder;
mod upload_binder_registry;
mod upload_binding_errors;
mod upload_set_selector;

pub use request_uploads::*;
pub use upload::*;
pub use upload_array::*;
pub use upload_binder::*;
pub use upload_binder_registry::*;
pub use upload_binding_errors::*;
pub use upload_set_selector::*;
