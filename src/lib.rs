pub mod config;
pub mod database;
pub mod endpoints;
pub mod errors;
pub mod search;
pub mod telemetry;
pub mod templates;


use std::sync::Arc;

use database::PlaceStore;

pub struct State {
    places: Arc<dyn PlaceStore>
}

impl State {
    pub fn new(places: Arc<dyn PlaceStore>) -> State {
        State { places }
    }

    pub fn places(&self) -> &dyn PlaceStore {
        self.places.as_ref()
    }
}

pub type SharedState = Arc<State>;
