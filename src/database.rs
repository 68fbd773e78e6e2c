pub mod schema;
pub mod models;
pub mod memory;

use async_trait::async_trait;
use diesel::{pg::Pg, BoolExpressionMethods, PgTextExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::{pooled_connection::AsyncDieselConnectionManager, AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::{errors::ViewError, search::PlaceFilter};
use self::{models::Place, schema::cities};

pub use memory::MemoryPlaceStore;

pub type Pool = bb8::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

/// Read access to the Place records a search runs against.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Every place the filter selects, in ascending id order.
    async fn search(&self, filter: &PlaceFilter) -> Result<Vec<Place>, ViewError>;
}

pub struct PgPlaceStore {
    pool: Pool
}

impl PgPlaceStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<PgPlaceStore> {
        let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let pool = bb8::Pool::builder().build(config).await?;
        Ok(PgPlaceStore { pool })
    }
}

/// Places the filter selects, ordered by id. An empty term adds no `WHERE`.
pub(crate) fn place_query(filter: &PlaceFilter) -> cities::BoxedQuery<'static, Pg> {
    let mut query = cities::table
        .order(cities::id)
        .into_boxed();

    if !filter.is_unfiltered() {
        let pattern = filter.like_pattern();
        debug!("Searching cities with pattern {}", pattern);
        query = query.filter(cities::name.ilike(pattern.clone()).or(cities::state.ilike(pattern)));
    }

    query
}

#[async_trait]
impl PlaceStore for PgPlaceStore {

    async fn search(&self, filter: &PlaceFilter) -> Result<Vec<Place>, ViewError> {
        let mut conn = self.pool
            .get()
            .await
            .map_err(|err| ViewError::DatabaseConnection(err.to_string()))?;

        let places: Vec<Place> = place_query(filter)
            .select(Place::as_select())
            .load(&mut *conn)
            .await?;

        Ok(places)
    }

}

#[cfg(test)]
mod tests {
    use diesel::{debug_query, pg::Pg};

    use super::place_query;
    use crate::search::PlaceFilter;

    fn sql(term: Option<&str>) -> String {
        let query = place_query(&PlaceFilter::new(term.map(String::from)));
        debug_query::<Pg, _>(&query).to_string()
    }

    #[test]
    fn test_filtered_query() {
        let sql = sql(Some("Mi_a"));

        assert!(sql.contains(r#"WHERE (("cities"."name" ILIKE $1) OR ("cities"."state" ILIKE $2))"#), "{}", sql);
        assert!(sql.contains(r#"ORDER BY "cities"."id""#), "{}", sql);
        assert!(sql.ends_with(r#"-- binds: ["%Mi\_a%", "%Mi\_a%"]"#), "{}", sql);
    }

    #[test]
    fn test_unfiltered_query() {
        for term in [None, Some("")] {
            let sql = sql(term);

            assert!(!sql.contains("WHERE"), "{}", sql);
            assert!(sql.contains(r#"ORDER BY "cities"."id""#), "{}", sql);
            assert!(sql.ends_with("-- binds: []"), "{}", sql);
        }
    }
}
