//! TaskSense core
//!
//! Rule-based inference of task priority and category.
//!
//! ```
//! use tasksense_core::brain::{PriorityLevel, TaskAnalyzer, TaskCategory};
//!
//! let analyzer = TaskAnalyzer::new();
//! let result = analyzer.analyze("Buy groceries for dinner", Some("Get ingredients"));
//! assert_eq!(result.category, TaskCategory::Shopping);
//! assert_ne!(result.priority, PriorityLevel::Urgent);
//! ```

pub mod batch;
pub mod brain;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;

pub use brain::{AnalysisResult, PriorityLevel, TaskAnalyzer, TaskCategory};
pub use error::AppError;

#[cfg(test)]
mod tests;
