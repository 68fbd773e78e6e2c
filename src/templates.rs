use askama::Template;

use crate::database::models::Place;

#[derive(Template)]
#[template(path = "home.html")]
pub(crate) struct Home;

#[derive(Template)]
#[template(path = "search_result.html")]
pub(crate) struct SearchResults {
    pub(crate) places: Vec<Place>,
    pub(crate) query: String
}

#[derive(Template)]
#[template(path = "404.html")]
pub(crate) struct NotFound;
