//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod campaigns;
pub mod complaints;
pub mod dashboard;
pub mod filter_dialog;
pub mod form;
pub mod help_dialog;
pub mod issues;
pub mod layout;
pub mod login;
pub mod page_size_dialog;
pub mod quit_dialog;
pub mod repairs;
pub mod sms;
pub mod table_view;
pub mod tasks;
pub mod users;

pub use campaigns::CampaignsView;
pub use complaints::ComplaintsView;
pub use dashboard::{draw_dashboard, DashboardStats};
pub use filter_dialog::FilterDialog;
pub use form::{FormField, FormState};
pub use help_dialog::HelpDialog;
pub use issues::IssuesView;
pub use layout::{calculate_main_layout, centered_popup};
pub use login::LoginComponent;
pub use page_size_dialog::PageSizeDialog;
pub use quit_dialog::QuitDialog;
pub use repairs::RepairsView;
pub use sms::SmsView;
pub use table_view::{TableController, TableOp};
pub use tasks::TasksView;
pub use users::UsersView;
