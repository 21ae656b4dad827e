// Application Lifecycle Integration Tests
//
// End-to-end behavior of the lifecycle engine against real SQLite.

use std::sync::Arc;

use jobboard_core::application::{
    ApplicationLifecycleService, ApplyOutcome, ApplyRequest, UpdateStatusRequest,
};
use jobboard_core::domain::{ApplicationStatus, JobPosting, User};
use jobboard_core::error::AppError;
use jobboard_core::port::id_provider::UuidProvider;
use jobboard_core::port::time_provider::{SystemTimeProvider, TimeProvider};
use jobboard_core::port::{
    ApplicationFilter, ApplicationStore, JobStore, TransactionalApplicationStore, UserStore,
};
use jobboard_infra_sqlite::{
    create_pool, run_migrations, SqliteApplicationStore, SqliteJobStore, SqliteUserStore,
};
use sqlx::SqlitePool;

struct TestEnv {
    pool: SqlitePool,
    service: ApplicationLifecycleService,
    users: SqliteUserStore,
    jobs: SqliteJobStore,
}

async fn setup() -> TestEnv {
    let pool = create_pool(":memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let sqlite_store = Arc::new(SqliteApplicationStore::new(pool.clone()));
    let tx_store: Arc<dyn TransactionalApplicationStore> = sqlite_store.clone();
    let reader: Arc<dyn ApplicationStore> = sqlite_store;
    let jobs = Arc::new(SqliteJobStore::new(pool.clone()));

    let service = ApplicationLifecycleService::new(
        tx_store,
        reader,
        jobs,
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
    );

    TestEnv {
        pool: pool.clone(),
        service,
        users: SqliteUserStore::new(pool.clone()),
        jobs: SqliteJobStore::new(pool),
    }
}

async fn seed_user(env: &TestEnv, id: &str) {
    env.users
        .insert(&User::new(id, format!("{}@example.com", id), 1000))
        .await
        .unwrap();
}

async fn seed_job(env: &TestEnv, id: &str, admin: &str, deadline: Option<i64>) {
    let mut job = JobPosting::new(id, "Backend Engineer", "Rust services", admin, 1000);
    job.deadline = deadline;
    env.jobs.insert(&job).await.unwrap();
}

fn apply_req(user: &str, job: &str) -> ApplyRequest {
    ApplyRequest {
        user_id: user.to_string(),
        job_id: job.to_string(),
    }
}

async fn count_applications(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM applications")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_apply_creates_submitted_application() {
    let env = setup().await;
    seed_user(&env, "user-1").await;
    seed_job(&env, "job-1", "user-1", None).await;

    let outcome = env.service.apply(apply_req("user-1", "job-1")).await.unwrap();
    let app = match outcome {
        ApplyOutcome::Created(app) => app,
        ApplyOutcome::AlreadyApplied => panic!("expected a fresh application"),
    };

    assert_eq!(app.status, ApplicationStatus::Submitted);
    assert_eq!(app.user_id, "user-1");
    assert_eq!(app.job_id, "job-1");

    let fetched = env.service.get(&app.id).await.unwrap();
    assert_eq!(fetched.status, ApplicationStatus::Submitted);
}

#[tokio::test]
async fn test_second_apply_is_duplicate_signal() {
    let env = setup().await;
    seed_user(&env, "user-1").await;
    seed_job(&env, "job-1", "user-1", None).await;

    let first = env.service.apply(apply_req("user-1", "job-1")).await.unwrap();
    assert!(matches!(first, ApplyOutcome::Created(_)));

    let second = env.service.apply(apply_req("user-1", "job-1")).await.unwrap();
    assert!(matches!(second, ApplyOutcome::AlreadyApplied));

    assert_eq!(count_applications(&env.pool).await, 1);
}

#[tokio::test]
async fn test_apply_validates_arguments() {
    let env = setup().await;

    let err = env.service.apply(apply_req("", "job-1")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = env.service.apply(apply_req("user-1", "")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_apply_to_unknown_job_is_not_found() {
    let env = setup().await;
    seed_user(&env, "user-1").await;

    let err = env
        .service
        .apply(apply_req("user-1", "no-such-job"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(count_applications(&env.pool).await, 0);
}

#[tokio::test]
async fn test_apply_deadline_enforcement() {
    let env = setup().await;
    seed_user(&env, "user-1").await;

    let now = SystemTimeProvider.now_millis();

    // Expired posting rejects new applications
    seed_job(&env, "job-expired", "user-1", Some(now - 60_000)).await;
    let err = env
        .service
        .apply(apply_req("user-1", "job-expired"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(count_applications(&env.pool).await, 0);

    // Future deadline still accepts
    seed_job(&env, "job-open", "user-1", Some(now + 86_400_000)).await;
    let outcome = env
        .service
        .apply(apply_req("user-1", "job-open"))
        .await
        .unwrap();
    assert!(matches!(outcome, ApplyOutcome::Created(_)));

    // No deadline accepts indefinitely
    seed_job(&env, "job-evergreen", "user-1", None).await;
    let outcome = env
        .service
        .apply(apply_req("user-1", "job-evergreen"))
        .await
        .unwrap();
    assert!(matches!(outcome, ApplyOutcome::Created(_)));
}

#[tokio::test]
async fn test_update_status_happy_path() {
    let env = setup().await;
    seed_user(&env, "user-1").await;
    seed_job(&env, "job-1", "user-1", None).await;

    let app = match env.service.apply(apply_req("user-1", "job-1")).await.unwrap() {
        ApplyOutcome::Created(app) => app,
        ApplyOutcome::AlreadyApplied => unreachable!(),
    };

    let updated = env
        .service
        .update_status(UpdateStatusRequest {
            application_id: app.id.clone(),
            status: "under_review".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::UnderReview);

    let fetched = env.service.get(&app.id).await.unwrap();
    assert_eq!(fetched.status, ApplicationStatus::UnderReview);
}

#[tokio::test]
async fn test_update_status_rejects_unknown_value_without_mutation() {
    let env = setup().await;
    seed_user(&env, "user-1").await;
    seed_job(&env, "job-1", "user-1", None).await;

    let app = match env.service.apply(apply_req("user-1", "job-1")).await.unwrap() {
        ApplyOutcome::Created(app) => app,
        ApplyOutcome::AlreadyApplied => unreachable!(),
    };

    let err = env
        .service
        .update_status(UpdateStatusRequest {
            application_id: app.id.clone(),
            status: "not_a_real_status".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));
    assert!(err.to_string().contains("under_review"));

    // Row untouched
    let fetched = env.service.get(&app.id).await.unwrap();
    assert_eq!(fetched.status, ApplicationStatus::Submitted);
}

#[tokio::test]
async fn test_update_status_missing_application_is_not_found() {
    let env = setup().await;

    let err = env
        .service
        .update_status(UpdateStatusRequest {
            application_id: "no-such-app".to_string(),
            status: "accepted".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_transitions_out_of_terminal_states_are_allowed() {
    // The engine imposes no transition graph: any status may follow any
    // other, terminal-looking states included.
    let env = setup().await;
    seed_user(&env, "user-1").await;
    seed_job(&env, "job-1", "user-1", None).await;

    let app = match env.service.apply(apply_req("user-1", "job-1")).await.unwrap() {
        ApplyOutcome::Created(app) => app,
        ApplyOutcome::AlreadyApplied => unreachable!(),
    };

    for status in ["accepted", "withdrawn", "rejected", "submitted", "submitted"] {
        let updated = env
            .service
            .update_status(UpdateStatusRequest {
                application_id: app.id.clone(),
                status: status.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated.status.as_str(), status);
    }
}

#[tokio::test]
async fn test_delete_returns_snapshot() {
    let env = setup().await;
    seed_user(&env, "user-1").await;
    seed_job(&env, "job-1", "user-1", None).await;

    let app = match env.service.apply(apply_req("user-1", "job-1")).await.unwrap() {
        ApplyOutcome::Created(app) => app,
        ApplyOutcome::AlreadyApplied => unreachable!(),
    };

    let deleted = env.service.delete(&app.id).await.unwrap();
    assert_eq!(deleted.id, app.id);
    assert_eq!(deleted.status, ApplicationStatus::Submitted);

    let err = env.service.get(&app.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = env.service.delete(&app.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_list_filters_by_user_and_job() {
    let env = setup().await;
    for user in ["user-1", "user-2"] {
        seed_user(&env, user).await;
    }
    for job in ["job-1", "job-2"] {
        seed_job(&env, job, "user-1", None).await;
    }

    env.service.apply(apply_req("user-1", "job-1")).await.unwrap();
    env.service.apply(apply_req("user-1", "job-2")).await.unwrap();
    env.service.apply(apply_req("user-2", "job-1")).await.unwrap();

    let all = env.service.list(&ApplicationFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let for_user = env
        .service
        .list(&ApplicationFilter::for_user("user-1"))
        .await
        .unwrap();
    assert_eq!(for_user.len(), 2);
    assert!(for_user.iter().all(|a| a.user_id == "user-1"));

    let for_job = env
        .service
        .list(&ApplicationFilter::for_job("job-1"))
        .await
        .unwrap();
    assert_eq!(for_job.len(), 2);

    // Unknown user is an empty list, not an error
    let unknown = env
        .service
        .list(&ApplicationFilter::for_user("nobody"))
        .await
        .unwrap();
    assert!(unknown.is_empty());
}
