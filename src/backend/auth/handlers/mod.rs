//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── signup.rs    - POST /api/signup
//! ├── login.rs     - POST /api/login
//! ├── profile.rs   - GET /get-username (protected)
//! ├── upload.rs    - POST /upload-profile-pic (protected)
//! └── settings.rs  - PUT /api/update-settings (protected)
//! ```
//!
//! Protected handlers take an `AuthUser` parameter, which runs the
//! bearer-token gate before the handler body.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Current user profile handler
pub mod profile;

/// Profile picture upload handler
pub mod upload;

/// Settings update handler
pub mod settings;

pub use login::login;
pub use profile::get_profile;
pub use settings::update_settings;
pub use signup::signup;
pub use upload::upload_profile_pic;
