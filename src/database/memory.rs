use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::ViewError, search::PlaceFilter};
use super::{models::{NewPlace, Place}, PlaceStore};

/// Place records held in process memory, in insertion order.
#[derive(Default)]
pub struct MemoryPlaceStore {
    places: RwLock<Vec<Place>>
}

impl MemoryPlaceStore {
    pub fn new() -> MemoryPlaceStore {
        MemoryPlaceStore::default()
    }

    pub async fn insert(&self, new_place: NewPlace<'_>) -> Place {
        let mut places = self.places.write().await;
        let id = places.last().map_or(1, |place| place.id + 1);
        let place = Place {
            id,
            name: new_place.name.to_string(),
            state: new_place.state.to_string()
        };

        places.push(place.clone());
        place
    }
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {

    async fn search(&self, filter: &PlaceFilter) -> Result<Vec<Place>, ViewError> {
        let places = self.places.read().await;
        Ok(places
            .iter()
            .filter(|place| filter.matches(place))
            .cloned()
            .collect())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryPlaceStore::new();
        let miami = store.insert(NewPlace { name: "Miami", state: "Florida" }).await;
        let orlando = store.insert(NewPlace { name: "Orlando", state: "Florida" }).await;

        assert_eq!(miami.id, 1);
        assert_eq!(orlando.id, 2);
    }

    #[tokio::test]
    async fn test_search_keeps_insertion_order() {
        let store = MemoryPlaceStore::new();
        store.insert(NewPlace { name: "Orlando", state: "Florida" }).await;
        store.insert(NewPlace { name: "Austin", state: "Texas" }).await;
        store.insert(NewPlace { name: "Miami", state: "Florida" }).await;

        let names: Vec<String> = store
            .search(&PlaceFilter::new(Some("florida".into())))
            .await
            .unwrap()
            .into_iter()
            .map(|place| place.name)
            .collect();

        assert_eq!(names, ["Orlando", "Miami"]);
    }

    #[tokio::test]
    async fn test_percent_is_literal() {
        let store = MemoryPlaceStore::new();
        store.insert(NewPlace { name: "Miami", state: "Florida" }).await;

        let places = store.search(&PlaceFilter::new(Some("%".into()))).await.unwrap();
        assert!(places.is_empty());
    }
}
