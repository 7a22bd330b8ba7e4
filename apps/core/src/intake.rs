//! Task intake workflow.
//!
//! Validates an incoming [`CreateTaskRequest`] and fills in whatever
//! classification the caller left out. Explicit values always win: the
//! analyzer only runs when priority or category is missing, and a supplied
//! value replaces the inferred one.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::brain::TaskAnalyzer;
use crate::error::AppError;
use crate::models::{ClassifiedTask, CreateTaskRequest, TaskStatus};

/// Classifies incoming tasks with one shared analyzer
#[derive(Debug, Clone, Default)]
pub struct TaskIntake {
    analyzer: TaskAnalyzer,
}

impl TaskIntake {
    pub fn new(analyzer: TaskAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &TaskAnalyzer {
        &self.analyzer
    }

    /// Validate a request and produce a classified task record
    pub fn classify(&self, request: CreateTaskRequest) -> Result<ClassifiedTask, AppError> {
        request.validate()?;
        if request.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be blank".to_string()));
        }

        let CreateTaskRequest {
            title,
            description,
            priority: explicit_priority,
            category: explicit_category,
        } = request;

        let (priority, category, confidence, reasoning) =
            match (explicit_priority, explicit_category) {
                (Some(priority), Some(category)) => {
                    debug!("Task '{}' fully classified by caller, skipping analysis", title);
                    (priority, category, None, Vec::new())
                }
                (explicit_priority, explicit_category) => {
                    let analysis = self.analyzer.analyze(&title, description.as_deref());
                    let mut reasoning = analysis.reasoning;

                    let priority = match explicit_priority {
                        Some(priority) => {
                            reasoning.push(format!(
                                "Priority {} supplied by caller (inferred {})",
                                priority, analysis.priority
                            ));
                            priority
                        }
                        None => analysis.priority,
                    };

                    let category = match explicit_category {
                        Some(category) => {
                            reasoning.push(format!(
                                "Category {} supplied by caller (inferred {})",
                                category, analysis.category
                            ));
                            category
                        }
                        None => analysis.category,
                    };

                    (priority, category, Some(analysis.confidence), reasoning)
                }
            };

        let task = ClassifiedTask {
            id: Uuid::new_v4(),
            title,
            description,
            status: TaskStatus::Pending,
            priority,
            category,
            confidence,
            reasoning,
            created_at: Utc::now(),
        };

        info!(
            "Classified task {}: priority={}, category={}",
            task.id, task.priority, task.category
        );

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{PriorityLevel, TaskCategory};

    #[test]
    fn test_inferred_classification() {
        let intake = TaskIntake::default();
        let task = intake
            .classify(CreateTaskRequest::new(
                "Buy groceries for dinner",
                Some("Get ingredients".to_string()),
            ))
            .unwrap();

        assert_eq!(task.category, TaskCategory::Shopping);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.confidence.is_some());
        assert!(!task.reasoning.is_empty());
    }

    #[test]
    fn test_blank_title_rejected() {
        let intake = TaskIntake::default();
        let result = intake.classify(CreateTaskRequest::new("   ", None));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = intake.classify(CreateTaskRequest::new("", None));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_fully_classified_skips_analysis() {
        let intake = TaskIntake::default();
        let mut request = CreateTaskRequest::new("urgent deadline today", None);
        request.priority = Some(PriorityLevel::Low);
        request.category = Some(TaskCategory::Home);
        assert!(request.is_fully_classified());

        let task = intake.classify(request).unwrap();
        assert_eq!(task.priority, PriorityLevel::Low);
        assert_eq!(task.category, TaskCategory::Home);
        assert!(task.confidence.is_none());
        assert!(task.reasoning.is_empty());
    }
}
