mod form_field;
mod form_input;
mod service_rating;
mod split_result;

pub use form_field::FormField;
pub use form_input::FormInput;
pub use service_rating::ServiceRating;
pub use split_result::SplitResult;
