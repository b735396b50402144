//! Diesel repository tests against a live PostgreSQL database.
//!
//! Set `EXERCISE_TRACKER_TEST_DATABASE_URL` to run them; they are skipped
//! otherwise. Each test registers fresh users, so no cleanup is needed.

use chrono::NaiveDate;
use rstest::rstest;

use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
use exercise_tracker::domain::{
    Exercise, ExerciseDate, ExerciseFilter, LogQuery, Minutes, User, UserId, Username,
};
use exercise_tracker::outbound::persistence::{
    DbPool, DieselExerciseRepository, DieselUserRepository, PoolConfig, run_pending_migrations,
};

const DATABASE_URL_ENV: &str = "EXERCISE_TRACKER_TEST_DATABASE_URL";

async fn pool() -> Option<DbPool> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        eprintln!("SKIP-TEST-CLUSTER: {DATABASE_URL_ENV} not set");
        return None;
    };
    let migrate_url = url.clone();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migrate_url))
        .await
        .expect("migration task")
        .expect("migrations apply");
    Some(
        DbPool::new(PoolConfig::new(url).with_max_size(2))
            .await
            .expect("pool builds"),
    )
}

fn date(y: i32, m: u32, d: u32) -> ExerciseDate {
    ExerciseDate::from_naive(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
}

fn exercise(owner: &User, description: &str, on: ExerciseDate) -> Exercise {
    Exercise::record(
        *owner.id(),
        description,
        Some(Minutes::new(30.0).expect("finite")),
        on,
    )
}

#[rstest]
#[tokio::test]
async fn users_round_trip() {
    let Some(pool) = pool().await else { return };
    let repo = DieselUserRepository::new(pool);
    let user = User::register(Username::new("diesel fcc"));

    repo.insert(&user).await.expect("insert");

    assert_eq!(repo.find_by_id(user.id()).await.expect("find"), Some(user.clone()));
    assert_eq!(repo.find_by_id(&UserId::random()).await.expect("find"), None);
    assert!(repo.list_all().await.expect("list").contains(&user));
}

#[rstest]
#[tokio::test]
async fn exercises_filter_order_and_limit() {
    let Some(pool) = pool().await else { return };
    let users = DieselUserRepository::new(pool.clone());
    let repo = DieselExerciseRepository::new(pool);
    let owner = User::register(Username::new("diesel logger"));
    users.insert(&owner).await.expect("insert user");

    let late = exercise(&owner, "late", date(2020, 3, 1));
    let early = exercise(&owner, "early", date(2020, 1, 1));
    let middle = exercise(&owner, "middle", date(2020, 2, 1));
    for stored in [&late, &early, &middle] {
        repo.insert(stored).await.expect("insert exercise");
    }

    let everything = repo
        .find_matching(&ExerciseFilter::for_user(*owner.id(), &LogQuery::default()))
        .await
        .expect("query");
    assert_eq!(everything, vec![early.clone(), middle.clone(), late.clone()]);

    let bounded = LogQuery {
        from: Some(date(2020, 2, 1)),
        to: Some(date(2020, 3, 1)),
        limit: Some(1),
    };
    let page = repo
        .find_matching(&ExerciseFilter::for_user(*owner.id(), &bounded))
        .await
        .expect("query");
    assert_eq!(page, vec![middle]);
}

#[rstest]
#[tokio::test]
async fn exercise_without_duration_round_trips() {
    let Some(pool) = pool().await else { return };
    let users = DieselUserRepository::new(pool.clone());
    let repo = DieselExerciseRepository::new(pool);
    let owner = User::register(Username::new("diesel untimed"));
    users.insert(&owner).await.expect("insert user");
    let untimed = Exercise::record(*owner.id(), "stretch", None, date(2020, 1, 1));

    repo.insert(&untimed).await.expect("insert exercise");

    let stored = repo
        .find_matching(&ExerciseFilter::for_user(*owner.id(), &LogQuery::default()))
        .await
        .expect("query");
    assert_eq!(stored, vec![untimed]);
}

#[rstest]
#[tokio::test]
async fn exercise_for_unknown_user_violates_foreign_key() {
    let Some(pool) = pool().await else { return };
    let repo = DieselExerciseRepository::new(pool);
    let ghost = User::register(Username::new("ghost"));

    let error = repo
        .insert(&exercise(&ghost, "run", date(2020, 1, 1)))
        .await
        .expect_err("foreign key rejects orphan");
    assert_eq!(error.message(), "database error");
}
