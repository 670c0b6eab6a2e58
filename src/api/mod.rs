//! Patient HTTP API.
//!
//! Maps HTTP verbs and paths under `/api/` to `PatientService` calls and
//! domain errors to status codes. No business logic lives here.
//!
//! The router is composable — `patient_api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::patient_api_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::ApiContext;
