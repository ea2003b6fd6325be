mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

pub mod dashboard;
pub use dashboard::{DashboardTab, DashboardView};
