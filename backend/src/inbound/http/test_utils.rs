//! Test helpers for the HTTP handlers.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::{Value, json};

use crate::Trace;
use crate::domain::ExerciseTrackerService;
use crate::inbound::http::configure;
use crate::inbound::http::cors::cors_headers;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::landing::LandingPage;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};

/// Clock pinned to 2026-03-14 so defaulted dates are predictable.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }
}

/// Rendered date that [`FixtureClock`] reports as today.
pub fn today() -> &'static str {
    "Sat Mar 14 2026"
}

/// Full application wired to empty in-memory repositories.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = ExerciseTrackerService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryExerciseRepository::new()),
        Arc::new(FixtureClock),
    );
    App::new()
        .app_data(web::Data::new(HttpState::from_service(Arc::new(service))))
        .app_data(web::Data::new(HealthState::new()))
        .app_data(web::Data::new(LandingPage::default()))
        .wrap(cors_headers())
        .wrap(Trace)
        .configure(configure)
}

pub async fn read_json<B: MessageBody>(res: ServiceResponse<B>) -> Value {
    let body = test::read_body(res).await;
    serde_json::from_slice(&body).expect("json response")
}

/// Create a user over HTTP and return its `_id`.
pub async fn create_user<S, B>(app: &S, username: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": username}))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success(), "user creation failed");
    read_json(res).await["_id"]
        .as_str()
        .expect("string id")
        .to_owned()
}

/// Log a 30 minute exercise on `date` for user `id`.
pub async fn log_exercise<S, B>(app: &S, id: &str, description: &str, date: &str)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/users/{id}/exercises"))
            .set_json(json!({"description": description, "duration": 30, "date": date}))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success(), "exercise logging failed");
}
