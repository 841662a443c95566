//! In-process HTTP testing for Holonet services.
//!
//! ```ignore
//! let app = TestApp::from_builder(holonet::build_app(state));
//! app.post("/planets")
//!     .json(&json!({"name": "Hoth", ...}))
//!     .send()
//!     .await
//!     .assert_ok()
//!     .assert_json_path("name", "Hoth");
//! ```

mod app;
mod path;

pub use app::{TestApp, TestRequest, TestResponse};
pub use path::{resolve_path, PathToken};
