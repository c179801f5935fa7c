pub mod engine;
pub mod services;
pub mod timeline;

pub use engine::{LedgerEngine, MonthView};
pub use timeline::MonthClass;
