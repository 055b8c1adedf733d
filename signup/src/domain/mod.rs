//! Domain primitives for the signup flow.
//!
//! Purpose: define the step records, the field rules that judge them, the
//! transfer object handed to the display page and the ports through which
//! the flow reaches its collaborators. Nothing here performs I/O.
//!
//! Public surface:
//! - `CredentialInput` / `ProfileInput`: raw step records.
//! - `SessionRecord`: completed result of both steps.
//! - `ValidationErrors` and the `validation` predicates.
//! - `ports`: confirmation, navigation and display contracts.

pub mod attempt_id;
pub mod credentials;
pub mod field;
pub mod normalize;
pub mod ports;
pub mod profile;
pub mod reference_data;
pub mod session_record;
pub mod validation;

pub use self::attempt_id::AttemptId;
pub use self::credentials::CredentialInput;
pub use self::field::{CREDENTIAL_FIELDS, Field, PROFILE_FIELDS};
pub use self::normalize::{capitalize_name, normalize_email, normalize_pan};
pub use self::profile::ProfileInput;
pub use self::reference_data::ReferenceData;
pub use self::session_record::SessionRecord;
pub use self::validation::{ValidationErrors, validate_credentials, validate_profile};
