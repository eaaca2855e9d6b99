use std::fmt::Display;

use crate::infrastructure::logging::logger;
use crate::presentation::errors::HttpError;

pub fn log_request(route: impl AsRef<str>) {
    logger::debug(&format!("Request: {}", route.as_ref()));
}

pub fn map_http_error<E>(context: impl AsRef<str>) -> impl FnOnce(E) -> HttpError
where
    E: Display + Into<HttpError>,
{
    let context = context.as_ref().to_string();

    move |error| {
        let message = format!("{}: {}", context, error);
        let error = error.into();
        if error.status().is_server_error() {
            logger::error(&message);
        } else {
            logger::debug(&message);
        }
        error
    }
}
