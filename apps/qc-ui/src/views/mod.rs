pub mod auth_view;
pub mod main_view;
pub mod report_view;
pub mod run_view;
pub mod setup_view;

pub use auth_view::{CreateUserView, LockView, LoginView};
pub use main_view::MainView;
pub use report_view::ReportView;
pub use run_view::RunView;
pub use setup_view::{InstructionView, PretestView};
