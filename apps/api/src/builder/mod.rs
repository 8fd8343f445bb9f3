// Resume builder session: the request/response boundary in front of the core.
// Forms are validated here before anything reaches the Resume; the core itself
// never re-validates.

pub mod export;
pub mod forms;
pub mod handlers;
pub mod validation;
