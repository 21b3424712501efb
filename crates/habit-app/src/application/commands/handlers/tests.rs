use std::sync::Arc;

use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::goal_commands::*;
use crate::application::commands::handlers::*;
use crate::application::test_support::{date, MockCheckInRepository, MockGoalRepository};
use habit_domain::calendar::DayName;
use habit_domain::check_in::CheckInRepository;
use habit_domain::goal::GoalRepository;
use habit_domain::shared::{DomainError, GoalId, UserId};

// Saturday
const TODAY: &str = "2025-03-15";

fn check_in(sleep: f64, water: f64, screen_time: f64) -> SaveCheckInCommand {
    SaveCheckInCommand {
        user_id: "user-1".to_string(),
        sleep,
        water,
        screen_time,
        today: date(TODAY),
    }
}

fn create_goal(title: &str, deadline: &str) -> CreateGoalCommand {
    CreateGoalCommand {
        user_id: "user-1".to_string(),
        title: title.to_string(),
        description: String::new(),
        deadline: deadline.to_string(),
        today: date(TODAY),
    }
}

// Check-in

#[tokio::test]
async fn test_save_check_in_is_dated_yesterday() {
    let repo = Arc::new(MockCheckInRepository::new());
    let handler = SaveCheckInCommandHandler::new(repo.clone());

    let result = handler.handle(check_in(7.5, 6.0, 2.0)).await.unwrap();
    assert_eq!(result.date, "2025-03-14");

    let user = UserId::from_string("user-1");
    assert!(repo
        .has_valid_check_in(&user, date("2025-03-14"))
        .await
        .unwrap());
    assert!(!repo.has_valid_check_in(&user, date(TODAY)).await.unwrap());
}

#[tokio::test]
async fn test_save_check_in_resubmission_replaces_entry() {
    let repo = Arc::new(MockCheckInRepository::new());
    let handler = SaveCheckInCommandHandler::new(repo.clone());

    handler.handle(check_in(6.0, 3.0, 4.0)).await.unwrap();
    handler.handle(check_in(8.0, 8.0, 1.0)).await.unwrap();

    let day = repo
        .find_day(&UserId::from_string("user-1"), date("2025-03-14"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(day.check_in_history.len(), 1);
    assert_eq!(day.stats.sleep, 8.0);
}

#[tokio::test]
async fn test_save_check_in_rejects_out_of_range_values() {
    let repo = Arc::new(MockCheckInRepository::new());
    let handler = SaveCheckInCommandHandler::new(repo.clone());

    for command in [
        check_in(25.0, 1.0, 1.0),
        check_in(7.25, 1.0, 1.0),
        check_in(7.0, 2.5, 1.0),
        check_in(7.0, 11.0, 1.0),
        check_in(7.0, 1.0, -0.5),
        check_in(f64::NAN, 1.0, 1.0),
    ] {
        let err = handler.handle(command).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    assert!(repo
        .find_day(&UserId::from_string("user-1"), date("2025-03-14"))
        .await
        .unwrap()
        .is_none());
}

// Goals

#[tokio::test]
async fn test_create_goal_for_today() {
    let repo = Arc::new(MockGoalRepository::new());
    let handler = CreateGoalCommandHandler::new(repo.clone());

    let dto = handler
        .handle(create_goal("  Read 20 pages ", "2025-03-15 21:00"))
        .await
        .unwrap();

    assert_eq!(dto.title, "Read 20 pages");
    assert_eq!(dto.day, "Sat");
    assert!(!dto.completed);

    let saved = repo
        .find_by_id(&GoalId::from_string(&dto.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.day(), DayName::Sat);
}

#[tokio::test]
async fn test_create_goal_validation() {
    let repo = Arc::new(MockGoalRepository::new());
    let handler = CreateGoalCommandHandler::new(repo);

    let err = handler
        .handle(create_goal("   ", "2025-03-15 21:00"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let err = handler
        .handle(create_goal("Walk", "tomorrow evening"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_update_goal_keeps_unchanged_fields_and_completion() {
    let repo = Arc::new(MockGoalRepository::new());
    let created = CreateGoalCommandHandler::new(repo.clone())
        .handle(create_goal("Stretch", "2025-03-15 07:00"))
        .await
        .unwrap();

    CompleteGoalCommandHandler::new(repo.clone())
        .handle(CompleteGoalCommand {
            user_id: "user-1".to_string(),
            goal_id: created.id.clone(),
        })
        .await
        .unwrap();

    let updated = UpdateGoalCommandHandler::new(repo.clone())
        .handle(UpdateGoalCommand {
            user_id: "user-1".to_string(),
            goal_id: created.id.clone(),
            title: None,
            description: Some("ten minutes".to_string()),
            deadline: Some("2025-03-15 08:30".to_string()),
            today: date(TODAY),
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "Stretch");
    assert_eq!(updated.description, "ten minutes");
    assert_eq!(updated.deadline, "2025-03-15 08:30");
    assert!(updated.completed);
}

#[tokio::test]
async fn test_update_goal_on_another_day_is_rejected() {
    let repo = Arc::new(MockGoalRepository::new());
    let created = CreateGoalCommandHandler::new(repo.clone())
        .handle(create_goal("Stretch", "2025-03-15 07:00"))
        .await
        .unwrap();

    // Sunday: the goal belongs to Saturday
    let err = UpdateGoalCommandHandler::new(repo)
        .handle(UpdateGoalCommand {
            user_id: "user-1".to_string(),
            goal_id: created.id,
            title: Some("Yoga".to_string()),
            description: None,
            deadline: None,
            today: date("2025-03-16"),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_goal_of_another_user_reads_as_not_found() {
    let repo = Arc::new(MockGoalRepository::new());
    let created = CreateGoalCommandHandler::new(repo.clone())
        .handle(create_goal("Stretch", "2025-03-15 07:00"))
        .await
        .unwrap();

    let err = CompleteGoalCommandHandler::new(repo.clone())
        .handle(CompleteGoalCommand {
            user_id: "intruder".to_string(),
            goal_id: created.id.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = DeleteGoalCommandHandler::new(repo.clone())
        .handle(DeleteGoalCommand {
            user_id: "intruder".to_string(),
            goal_id: created.id.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    assert!(repo
        .find_by_id(&GoalId::from_string(&created.id))
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_delete_goal() {
    let repo = Arc::new(MockGoalRepository::new());
    let created = CreateGoalCommandHandler::new(repo.clone())
        .handle(create_goal("Stretch", "2025-03-15 07:00"))
        .await
        .unwrap();
    let handler = DeleteGoalCommandHandler::new(repo.clone());

    handler
        .handle(DeleteGoalCommand {
            user_id: "user-1".to_string(),
            goal_id: created.id.clone(),
        })
        .await
        .unwrap();
    assert!(repo
        .find_by_id(&GoalId::from_string(&created.id))
        .await
        .unwrap()
        .is_none());

    let err = handler
        .handle(DeleteGoalCommand {
            user_id: "user-1".to_string(),
            goal_id: created.id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
