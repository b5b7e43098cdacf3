mod forms;
mod types;

pub use forms::{LoginForm, ProfileForm, RegisterForm};
pub use types::{AuthToken, Credentials, LoginOutcome, NewUser, ProfileUpdate, User};
