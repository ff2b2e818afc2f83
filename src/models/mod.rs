pub mod ui_mode;
pub mod credentials;
pub mod account;
pub mod reply;

pub use ui_mode::{UiMode, FormView};
pub use credentials::CredentialForm;
pub use account::AccountDetails;
pub use reply::{HttpReply, SubmitReply};
