//! Askama templates for the web frontend.

use askama::Template;

/// Home page with the route form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub station_count: usize,
    pub lines: Vec<String>,
}
