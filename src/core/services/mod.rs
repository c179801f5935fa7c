pub mod addition_service;
pub mod forecast_service;
pub mod overdue_service;
pub mod recurrence_service;
pub mod summary_service;
pub mod transaction_service;

pub use addition_service::AdditionService;
pub use forecast_service::ForecastService;
pub use overdue_service::{OverdueEntry, OverdueService};
pub use recurrence_service::RecurrenceService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
