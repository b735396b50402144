//! Landing page served at `/`.

use std::path::Path;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::warn;

const EMBEDDED_INDEX: &str = include_str!("../../../views/index.html");

/// HTML for the landing page, loaded once at startup.
#[derive(Debug, Clone)]
pub struct LandingPage {
    html: String,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self {
            html: EMBEDDED_INDEX.to_owned(),
        }
    }
}

impl LandingPage {
    /// Read `index.html` from `views_dir`, falling back to the built-in page
    /// when no directory is given or the file cannot be read.
    pub fn load(views_dir: Option<&Path>) -> Self {
        let Some(dir) = views_dir else {
            return Self::default();
        };
        let path = dir.join("index.html");
        match std::fs::read_to_string(&path) {
            Ok(html) => Self { html },
            Err(error) => {
                warn!(path = %path.display(), %error, "landing page unreadable; using built-in page");
                Self::default()
            }
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[get("/")]
pub async fn index(page: web::Data<LandingPage>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.html().to_owned())
}
