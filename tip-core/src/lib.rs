pub mod calculations;
pub mod form_state;
pub mod models;
pub mod validation;

pub use calculations::compute;
pub use form_state::FormState;
pub use models::*;
pub use validation::{InputValidator, ValidatedInput, ValidationError};
