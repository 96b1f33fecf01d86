//! Application command and query handlers.

mod admin_login;
mod build_report;
mod delete_responses;
mod get_dashboard;
mod list_responses;
mod submit_response;

pub use admin_login::{
    AdminLoginCommand, AdminLoginHandler, AdminLoginResult, AdminSessionRefresher,
};
pub use build_report::BuildReportHandler;
pub use delete_responses::{DeleteResponsesHandler, DeletionResult};
pub use get_dashboard::{
    DashboardCounter, DashboardReport, DashboardTallyCell, DashboardTallyRow, GetDashboardHandler,
};
pub use list_responses::ListResponsesHandler;
pub use submit_response::{SubmitReceipt, SubmitResponseCommand, SubmitResponseHandler};
