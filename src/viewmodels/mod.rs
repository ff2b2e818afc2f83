pub mod form_viewmodel;

pub use form_viewmodel::{FormViewModel, Feedback};
