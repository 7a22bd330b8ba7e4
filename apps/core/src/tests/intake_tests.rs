//! Intake Workflow Tests
//!
//! Request validation, caller overrides and the classified task record.

use crate::brain::{PriorityLevel, TaskCategory};
use crate::error::AppError;
use crate::intake::TaskIntake;
use crate::models::{ClassifiedTask, CreateTaskRequest, TaskStatus};

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_title_too_long() {
        let intake = TaskIntake::default();
        let result = intake.classify(CreateTaskRequest::new("a".repeat(201), None));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = intake.classify(CreateTaskRequest::new("a".repeat(200), None));
        assert!(result.is_ok());
    }

    #[test]
    fn test_description_too_long() {
        let intake = TaskIntake::default();
        let request = CreateTaskRequest::new("Write notes", Some("x".repeat(5001)));
        let result = intake.classify(request);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{"title": "Pay rent", "priority": "urgent"}"#;
        let request: CreateTaskRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.title, "Pay rent");
        assert_eq!(request.description, None);
        assert_eq!(request.priority, Some(PriorityLevel::Urgent));
        assert_eq!(request.category, None);
        assert!(!request.is_fully_classified());
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let json = r#"{"title": "Pay rent", "priority": "someday"}"#;
        let result: Result<CreateTaskRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod override_tests {
    use super::*;

    #[test]
    fn test_explicit_priority_overrides_inferred() {
        let intake = TaskIntake::default();
        let mut request = CreateTaskRequest::new("Pay electricity bill", None);
        request.priority = Some(PriorityLevel::Low);

        let task = intake.classify(request).unwrap();

        assert_eq!(task.priority, PriorityLevel::Low);
        assert_eq!(task.category, TaskCategory::Finance);
        assert!(task.confidence.is_some());
        assert_eq!(
            task.reasoning.last().unwrap(),
            "Priority low supplied by caller (inferred medium)"
        );
    }

    #[test]
    fn test_explicit_category_overrides_inferred() {
        let intake = TaskIntake::default();
        let mut request = CreateTaskRequest::new("Book a flight", None);
        request.category = Some(TaskCategory::Work);

        let task = intake.classify(request).unwrap();

        assert_eq!(task.category, TaskCategory::Work);
        assert!(task
            .reasoning
            .contains(&"Category work supplied by caller (inferred travel)".to_string()));
    }

    #[test]
    fn test_analyzer_is_reused() {
        let intake = TaskIntake::default();
        let direct = intake.analyzer().analyze("Buy milk", None);
        let task = intake
            .classify(CreateTaskRequest::new("Buy milk", None))
            .unwrap();

        assert_eq!(task.priority, direct.priority);
        assert_eq!(task.category, direct.category);
        assert_eq!(task.confidence, Some(direct.confidence));
        assert_eq!(task.reasoning, direct.reasoning);
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let intake = TaskIntake::default();
        let first = intake
            .classify(CreateTaskRequest::new("Buy milk", None))
            .unwrap();
        let second = intake
            .classify(CreateTaskRequest::new("Buy milk", None))
            .unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_task_serialization() {
        let intake = TaskIntake::default();
        let task = intake
            .classify(CreateTaskRequest::new(
                "Buy groceries for dinner",
                Some("Get ingredients".to_string()),
            ))
            .unwrap();

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["category"], "shopping");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["description"], "Get ingredients");
        assert!(value["created_at"].is_string());
        assert!(value["reasoning"].is_array());

        let back: ClassifiedTask = serde_json::from_value(value).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.status, TaskStatus::Pending);
        assert_eq!(back.category, TaskCategory::Shopping);
    }
}
