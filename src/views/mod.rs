pub mod login_form;

pub use login_form::{bind_login_form, LoginFormElements};
