#[macro_use]
extern crate rocket;

extern crate rocket_upload_binder;

use std::sync::Arc;

use rocket::{
    fairing::{Fairing, Info, Kind},
    http::Status,
    local::blocking::Client,
    Build, Data, Request, Rocket, State,
};

use rocket_upload_binder::{
    RequestUploads, Upload, UploadArray, UploadBinderRegistry, UploadBindingError,
    UploadSetSelector,
};

/// Stands in for a multipart parser: attaches fixed uploads to requests under `/form`.
struct FakeParser;

#[rocket::async_trait]
impl Fairing for FakeParser {
    fn info(&self) -> Info {
        Info {
            name: "fake parser", kind: Kind::Request
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        if request.uri().to_string().starts_with("/form") {
            let uploads = RequestUploads::new(vec![
                Upload::new("photo", "/tmp/rs-1").file_name(Some("cat.png")),
                Upload::new("doc", "/tmp/rs-2").file_name(Some("cv.pdf")),
                Upload::new("photo", "/tmp/rs-3").file_name(Some("dog.png")),
            ]);

            assert!(uploads.attach(request));

            let again = RequestUploads::new(vec![Upload::new("photo", "/tmp/rs-4")]);

            assert!(!again.attach(request));
        }
    }
}

fn names(array: UploadArray) -> String {
    array
        .iter()
        .map(|upload| upload.file_name.clone().unwrap_or_default())
        .collect::<Vec<String>>()
        .join(",")
}

#[get("/photos")]
fn photos(uploads: &RequestUploads, binders: &State<UploadBinderRegistry>) -> String {
    let photos: UploadArray = binders.bind("photo", uploads).unwrap();

    names(photos)
}

#[get("/first/<field>")]
fn first(field: &str, uploads: &RequestUploads, binders: &State<UploadBinderRegistry>) -> String {
    let upload: Option<Arc<Upload>> = binders.bind(field, uploads).unwrap();

    upload.and_then(|upload| upload.file_name.clone()).unwrap_or_default()
}

#[get("/count/<field>")]
fn count(field: &str, uploads: &RequestUploads) -> String {
    UploadSetSelector::select(field, uploads).len().to_string()
}

fn rocket() -> Rocket<Build> {
    rocket::build()
        .attach(FakeParser)
        .manage(UploadBinderRegistry::with_default_binders())
        .mount("/form", routes![photos, first, count])
        .mount("/plain", routes![photos])
}

#[test]
fn bind_array_in_route() {
    let client = Client::tracked(rocket()).unwrap();

    let response = client.get("/form/photos").dispatch();

    assert_eq!(Status::Ok, response.status());
    assert_eq!(Some("cat.png,dog.png".to_string()), response.into_string());
}

#[test]
fn bind_single_in_route() {
    let client = Client::tracked(rocket()).unwrap();

    let response = client.get("/form/first/doc").dispatch();

    assert_eq!(Some("cv.pdf".to_string()), response.into_string());

    let response = client.get("/form/first/avatar").dispatch();

    assert_eq!(Status::Ok, response.status());
    assert_eq!(Some(String::new()), response.into_string());
}

#[test]
fn no_match_is_not_an_error() {
    let client = Client::tracked(rocket()).unwrap();

    let response = client.get("/form/count/PHOTO").dispatch();

    assert_eq!(Status::Ok, response.status());
    assert_eq!(Some("0".to_string()), response.into_string());
}

#[test]
fn missing_uploads_in_route() {
    let client = Client::tracked(rocket()).unwrap();

    let response = client.get("/plain/photos").dispatch();

    assert_eq!(Status::InternalServerError, response.status());
}

#[test]
fn missing_uploads_in_request() {
    let client = Client::tracked(rocket()).unwrap();

    let request = client.get("/plain/photos");
    let request = request.inner();

    assert!(RequestUploads::current(request).is_err());
    assert!(UploadSetSelector::select_current("photo", request).is_err());

    let binders = UploadBinderRegistry::with_default_binders();

    assert_eq!(
        Err(UploadBindingError::MissingContextError),
        binders.bind_current::<UploadArray>(request, "photo")
    );

    // The request has been settled without uploads.
    assert!(!RequestUploads::new(vec![Upload::new("photo", "/tmp/rs-1")]).attach(request));
}

#[test]
fn attached_uploads_in_request() {
    let client = Client::tracked(rocket()).unwrap();

    let request = client.get("/plain/photos");
    let request = request.inner();

    assert!(RequestUploads::new(vec![
        Upload::new("photo", "/tmp/rs-1"),
        Upload::new("photo", "/tmp/rs-2"),
    ])
    .attach(request));

    assert_eq!(2, UploadSetSelector::select_current("photo", request).unwrap().len());

    let binders = UploadBinderRegistry::with_default_binders();

    let photos: UploadArray = binders.bind_current(request, "photo").unwrap();

    assert_eq!("/tmp/rs-2", photos[1].path.to_str().unwrap());
}
