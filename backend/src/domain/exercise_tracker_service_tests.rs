//! Tests for the exercise tracker service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockExerciseRepository, MockUserRepository};
use crate::domain::ErrorCode;
use chrono::{DateTime, Local, TimeZone, Utc};
use rstest::{fixture, rstest};

struct FixtureClock(DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

type Service = ExerciseTrackerService<MockUserRepository, MockExerciseRepository>;

fn make_service(users: MockUserRepository, exercises: MockExerciseRepository) -> Service {
    let now = Utc
        .with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
        .single()
        .expect("valid fixture timestamp");
    ExerciseTrackerService::new(
        Arc::new(users),
        Arc::new(exercises),
        Arc::new(FixtureClock(now)),
    )
}

#[fixture]
fn fcc() -> User {
    User::register(Username::new("fcc"))
}

fn minutes(value: f64) -> Option<Minutes> {
    Some(Minutes::new(value).expect("finite minutes"))
}

fn request(user: &User, duration: Option<&str>, date: Option<&str>) -> LogExerciseRequest {
    LogExerciseRequest {
        user_id: *user.id(),
        description: "run".to_owned(),
        duration: duration.map(str::to_owned),
        date: date.map(str::to_owned),
    }
}

fn users_returning(user: Option<User>) -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(user));
    users
}

#[tokio::test]
async fn list_users_returns_store_contents() {
    let stored = vec![
        User::register(Username::new("ada")),
        User::register(Username::new("grace")),
    ];
    let expected = stored.clone();
    let mut users = MockUserRepository::new();
    users
        .expect_list_all()
        .times(1)
        .return_once(move || Ok(stored));

    let listed = make_service(users, MockExerciseRepository::new())
        .list_users()
        .await
        .expect("users listed");
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn list_users_reports_empty_store_as_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_list_all().return_once(|| Ok(Vec::new()));

    let error = make_service(users, MockExerciseRepository::new())
        .list_users()
        .await
        .expect_err("empty store is an error");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "No users found");
}

#[rstest]
#[case(UserPersistenceError::connection("refused"))]
#[case(UserPersistenceError::query("syntax"))]
#[tokio::test]
async fn list_users_collapses_store_failures(#[case] failure: UserPersistenceError) {
    let mut users = MockUserRepository::new();
    users.expect_list_all().return_once(move || Err(failure));

    let error = make_service(users, MockExerciseRepository::new())
        .list_users()
        .await
        .expect_err("store failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn create_user_persists_and_returns_new_user() {
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .withf(|user| user.username().as_ref() == "fcc")
        .times(1)
        .return_once(|_| Ok(()));

    let user = make_service(users, MockExerciseRepository::new())
        .create_user(Username::new("fcc"))
        .await
        .expect("user created");
    assert_eq!(user.username().as_ref(), "fcc");
}

#[tokio::test]
async fn create_user_collapses_store_failure() {
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .return_once(|_| Err(UserPersistenceError::query("disk full")));

    let error = make_service(users, MockExerciseRepository::new())
        .create_user(Username::new("fcc"))
        .await
        .expect_err("insert failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[case::valid_input(Some("30"), None)]
#[case::unparsable_date(Some("30"), Some("someday"))]
#[case::non_numeric_duration(Some("long"), Some("2020-01-01"))]
#[tokio::test]
async fn log_exercise_rejects_unknown_user_before_validating(
    fcc: User,
    #[case] duration: Option<&str>,
    #[case] date: Option<&str>,
) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_insert().never();

    let error = make_service(users_returning(None), exercises)
        .log_exercise(request(&fcc, duration, date))
        .await
        .expect_err("unknown user");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "User not found");
}

#[rstest]
#[tokio::test]
async fn log_exercise_uses_supplied_date(fcc: User) {
    let date = ExerciseDate::parse("2020-01-01").expect("valid date");
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_insert()
        .withf(move |exercise| {
            exercise.date() == date
                && exercise.description() == "run"
                && exercise.duration() == minutes(30.0)
        })
        .times(1)
        .return_once(|_| Ok(()));

    let logged = make_service(users_returning(Some(fcc.clone())), exercises)
        .log_exercise(request(&fcc, Some("30"), Some("2020-01-01")))
        .await
        .expect("exercise logged");
    assert_eq!(logged.user, fcc);
    assert_eq!(logged.exercise.user_id(), fcc.id());
    assert_eq!(logged.exercise.date().to_string(), "Wed Jan 01 2020");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[tokio::test]
async fn log_exercise_defaults_date_to_clock_today(fcc: User, #[case] date: Option<&str>) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_insert().return_once(|_| Ok(()));

    let logged = make_service(users_returning(Some(fcc.clone())), exercises)
        .log_exercise(request(&fcc, Some("12.5"), date))
        .await
        .expect("exercise logged");
    assert_eq!(logged.exercise.date().to_string(), "Sat Mar 14 2026");
    assert_eq!(logged.exercise.duration(), minutes(12.5));
}

#[rstest]
#[case(None)]
#[case(Some(" "))]
#[tokio::test]
async fn log_exercise_stores_missing_duration_as_unset(
    fcc: User,
    #[case] duration: Option<&str>,
) {
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_insert()
        .withf(|exercise| exercise.duration().is_none())
        .times(1)
        .return_once(|_| Ok(()));

    let logged = make_service(users_returning(Some(fcc.clone())), exercises)
        .log_exercise(request(&fcc, duration, Some("2020-01-01")))
        .await
        .expect("exercise logged");
    assert_eq!(logged.exercise.duration(), None);
}

#[rstest]
#[case::unparsable_date(Some("30"), Some("someday"))]
#[case::non_numeric_duration(Some("long"), None)]
#[tokio::test]
async fn log_exercise_rejects_invalid_input_for_known_user(
    fcc: User,
    #[case] duration: Option<&str>,
    #[case] date: Option<&str>,
) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_insert().never();

    let error = make_service(users_returning(Some(fcc.clone())), exercises)
        .log_exercise(request(&fcc, duration, date))
        .await
        .expect_err("invalid input");
    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn log_exercise_collapses_insert_failure(fcc: User) {
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_insert()
        .return_once(|_| Err(ExercisePersistenceError::connection("pool exhausted")));

    let error = make_service(users_returning(Some(fcc.clone())), exercises)
        .log_exercise(request(&fcc, Some("30"), None))
        .await
        .expect_err("insert failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn fetch_log_passes_bounds_and_default_limit(fcc: User) {
    let owner = *fcc.id();
    let from = ExerciseDate::parse("1970-01-01").expect("valid from");
    let to = ExerciseDate::parse("2100-01-01").expect("valid to");
    let stored = vec![Exercise::record(
        owner,
        "run",
        minutes(30.0),
        ExerciseDate::parse("2020-01-01").expect("valid date"),
    )];
    let returned = stored.clone();
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_find_matching()
        .withf(move |filter| {
            filter.user_id() == &owner
                && filter.from() == Some(from)
                && filter.to() == Some(to)
                && filter.limit() == crate::domain::DEFAULT_LOG_LIMIT
        })
        .times(1)
        .return_once(move |_| Ok(returned));

    let log = make_service(users_returning(Some(fcc.clone())), exercises)
        .fetch_log(
            &owner,
            LogRequest {
                from: Some("1970-01-01".to_owned()),
                to: Some("2100-01-01".to_owned()),
                limit: Some("many".to_owned()),
            },
        )
        .await
        .expect("log fetched");
    assert_eq!(log.user(), &fcc);
    assert_eq!(log.entries(), stored.as_slice());
    assert_eq!(log.count(), 1);
}

#[rstest]
#[case(LogRequest::default())]
#[case(LogRequest { from: Some("yesterday".to_owned()), ..LogRequest::default() })]
#[tokio::test]
async fn fetch_log_rejects_unknown_user_before_validating(
    fcc: User,
    #[case] request: LogRequest,
) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_find_matching().never();

    let error = make_service(users_returning(None), exercises)
        .fetch_log(fcc.id(), request)
        .await
        .expect_err("unknown user");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn fetch_log_rejects_unparsable_bound_for_known_user(fcc: User) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_find_matching().never();

    let error = make_service(users_returning(Some(fcc.clone())), exercises)
        .fetch_log(
            fcc.id(),
            LogRequest {
                to: Some("2020-02-30".to_owned()),
                ..LogRequest::default()
            },
        )
        .await
        .expect_err("bad bound");
    assert_eq!(error.code(), ErrorCode::InternalError);
}
