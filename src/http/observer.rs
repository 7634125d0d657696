//! Status capture on the response path.

use axum::http::{Response, StatusCode};

/// Records the status code of the response passing through it.
///
/// Until a response is observed the code reads as 200, the status a client
/// sees when a handler writes a body without choosing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseObserver {
    pub status_code: StatusCode,
}

impl ResponseObserver {
    pub fn new() -> Self {
        Self {
            status_code: StatusCode::OK,
        }
    }

    /// Store the response's status and hand the response back untouched.
    pub fn observe<B>(&mut self, response: Response<B>) -> Response<B> {
        self.status_code = response.status();
        response
    }
}

impl Default for ResponseObserver {
    fn default() -> Self {
        Self::new()
    }
}
