use std::path::Path;

use axum::{Router, routing::get_service};
use tower_http::services::ServeFile;

use crate::state::SharedState;

/// URL path to template file.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "home.html"),
    ("/login", "login.html"),
    ("/signup", "signup.html"),
    ("/chatbot", "chatbot.html"),
    ("/contact", "contact.html"),
];

pub fn page_routes(templates_dir: &Path) -> Router<SharedState> {
    PAGES.iter().fold(Router::new(), |router, &(path, file)| {
        router.route(path, get_service(ServeFile::new(templates_dir.join(file))))
    })
}
