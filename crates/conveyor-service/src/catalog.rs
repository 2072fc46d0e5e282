//! Read-only product catalog queries scoped by client code.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use tracing::debug;

use conveyor_core::error::AppError;
use conveyor_core::result::AppResult;
use conveyor_database::repositories::{
    CatalogPart, CategoryRepository, ClientRepository, MaterialRepository, PartRepository,
    SeriesRepository,
};
use conveyor_entity::catalog::{
    Accessory, BearingOption, Bracket, BridgeInterlock, Category, Client, DropLiftUnit, FlightBar,
    Material, PartFamily, PneumaticControl, ProfileSeries, Stopper, Switch, SwivelUnit, TrackBend,
    TrackProfile, Trolley, TurnTableSwitch,
};

/// Parts returned per family by a product search.
const SEARCH_LIMIT: i64 = 20;

/// A part with its series and material records attached.
#[derive(Debug, Clone, Serialize)]
pub struct PartView<T> {
    #[serde(flatten)]
    pub part: T,
    pub series: Option<ProfileSeries>,
    pub material: Option<Material>,
}

/// A profile series with its material attached.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    #[serde(flatten)]
    pub series: ProfileSeries,
    pub material: Option<Material>,
}

/// Series and materials of one client indexed by id.
struct References {
    series: HashMap<i64, ProfileSeries>,
    materials: HashMap<i64, Material>,
}

impl References {
    fn attach<T: CatalogPart>(&self, part: T) -> PartView<T> {
        let catalog = part.catalog();
        let series = catalog.series_id.and_then(|id| self.series.get(&id)).cloned();
        let material = catalog
            .material_id
            .and_then(|id| self.materials.get(&id))
            .cloned();
        PartView {
            part,
            series,
            material,
        }
    }
}

/// Catalog lookups for the API and CLI.
#[derive(Debug, Clone)]
pub struct CatalogService {
    clients: Arc<ClientRepository>,
    categories: Arc<CategoryRepository>,
    materials: Arc<MaterialRepository>,
    series: Arc<SeriesRepository>,
    parts: Arc<PartRepository>,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            clients: Arc::new(ClientRepository::new(pool.clone())),
            categories: Arc::new(CategoryRepository::new(pool.clone())),
            materials: Arc::new(MaterialRepository::new(pool.clone())),
            series: Arc::new(SeriesRepository::new(pool.clone())),
            parts: Arc::new(PartRepository::new(pool)),
        }
    }

    /// Active clients ordered by name.
    pub async fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.clients.find_active().await
    }

    pub async fn get_client(&self, code: &str) -> AppResult<Client> {
        self.clients
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Client not found"))
    }

    pub async fn categories(&self, client_code: &str) -> AppResult<Vec<Category>> {
        let client = self.get_client(client_code).await?;
        self.categories.find_by_client(client.id).await
    }

    pub async fn materials(&self, client_code: &str) -> AppResult<Vec<Material>> {
        let client = self.get_client(client_code).await?;
        self.materials.find_by_client(client.id).await
    }

    pub async fn series(&self, client_code: &str) -> AppResult<Vec<SeriesView>> {
        let client = self.get_client(client_code).await?;
        let materials = self.material_index(client.id).await?;
        let series = self.series.find_by_client(client.id).await?;
        Ok(series
            .into_iter()
            .map(|series| SeriesView {
                material: series.material_id.and_then(|id| materials.get(&id)).cloned(),
                series,
            })
            .collect())
    }

    /// Parts of one family, optionally restricted to a series code.
    pub async fn parts<T: CatalogPart>(
        &self,
        client_code: &str,
        series_code: Option<&str>,
    ) -> AppResult<Vec<PartView<T>>> {
        let client = self.get_client(client_code).await?;
        let parts = self.parts.find_by_client::<T>(client.id, series_code).await?;
        let refs = self.references(client.id).await?;
        Ok(parts.into_iter().map(|p| refs.attach(p)).collect())
    }

    /// Track bends with optional series and exact angle filters.
    pub async fn bends(
        &self,
        client_code: &str,
        series_code: Option<&str>,
        angle: Option<i32>,
    ) -> AppResult<Vec<PartView<TrackBend>>> {
        let client = self.get_client(client_code).await?;
        let bends = self.parts.find_bends(client.id, series_code, angle).await?;
        let refs = self.references(client.id).await?;
        Ok(bends.into_iter().map(|p| refs.attach(p)).collect())
    }

    /// Parts of any family, as JSON.
    pub async fn parts_by_family(
        &self,
        client_code: &str,
        family: PartFamily,
        series_code: Option<&str>,
    ) -> AppResult<Value> {
        let value = match family {
            PartFamily::TrackProfiles => {
                to_json(self.parts::<TrackProfile>(client_code, series_code).await?)?
            }
            PartFamily::Bends => to_json(self.bends(client_code, series_code, None).await?)?,
            PartFamily::Brackets => to_json(self.parts::<Bracket>(client_code, series_code).await?)?,
            PartFamily::Trolleys => to_json(self.parts::<Trolley>(client_code, series_code).await?)?,
            PartFamily::Flightbars => {
                to_json(self.parts::<FlightBar>(client_code, series_code).await?)?
            }
            PartFamily::Switches => to_json(self.parts::<Switch>(client_code, series_code).await?)?,
            PartFamily::Stoppers => to_json(self.parts::<Stopper>(client_code, series_code).await?)?,
            PartFamily::SwivelUnits => {
                to_json(self.parts::<SwivelUnit>(client_code, series_code).await?)?
            }
            PartFamily::BridgeInterlocks => {
                to_json(self.parts::<BridgeInterlock>(client_code, series_code).await?)?
            }
            PartFamily::DropLifts => {
                to_json(self.parts::<DropLiftUnit>(client_code, series_code).await?)?
            }
            PartFamily::Accessories => {
                to_json(self.parts::<Accessory>(client_code, series_code).await?)?
            }
            PartFamily::Bearings => {
                to_json(self.parts::<BearingOption>(client_code, series_code).await?)?
            }
            PartFamily::Turntables => {
                to_json(self.parts::<TurnTableSwitch>(client_code, series_code).await?)?
            }
            PartFamily::Pneumatics => {
                to_json(self.parts::<PneumaticControl>(client_code, series_code).await?)?
            }
        };
        Ok(value)
    }

    /// Substring search over trolleys, bends, brackets and switches.
    ///
    /// Only non-empty families appear in the result. `category` restricts
    /// the search to one family, named by result key or category code.
    pub async fn search(
        &self,
        client_code: &str,
        query: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Map<String, Value>> {
        let client = self.get_client(client_code).await?;
        let refs = self.references(client.id).await?;
        let term = query.unwrap_or_default();
        let wanted = |key: &str, code: &str| {
            category
                .filter(|c| !c.trim().is_empty())
                .is_none_or(|c| c.eq_ignore_ascii_case(key) || c.eq_ignore_ascii_case(code))
        };

        let mut results = Map::new();
        if wanted("trolleys", "TROLLEYS") {
            let found = self.search_family::<Trolley>(client.id, term, &refs).await?;
            insert_non_empty(&mut results, "trolleys", found)?;
        }
        if wanted("trackBends", "BENDS") {
            let found = self.search_family::<TrackBend>(client.id, term, &refs).await?;
            insert_non_empty(&mut results, "trackBends", found)?;
        }
        if wanted("brackets", "BRACKETS") {
            let found = self.search_family::<Bracket>(client.id, term, &refs).await?;
            insert_non_empty(&mut results, "brackets", found)?;
        }
        if wanted("switches", "SWITCHES") {
            let found = self.search_family::<Switch>(client.id, term, &refs).await?;
            insert_non_empty(&mut results, "switches", found)?;
        }

        debug!(client = client_code, term, families = results.len(), "Product search");
        Ok(results)
    }

    async fn search_family<T: CatalogPart>(
        &self,
        client_id: i64,
        term: &str,
        refs: &References,
    ) -> AppResult<Vec<PartView<T>>> {
        let parts = self.parts.search::<T>(client_id, term, SEARCH_LIMIT).await?;
        Ok(parts.into_iter().map(|p| refs.attach(p)).collect())
    }

    async fn material_index(&self, client_id: i64) -> AppResult<HashMap<i64, Material>> {
        Ok(self
            .materials
            .find_by_client(client_id)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect())
    }

    async fn references(&self, client_id: i64) -> AppResult<References> {
        let series = self
            .series
            .find_by_client(client_id)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        Ok(References {
            series,
            materials: self.material_index(client_id).await?,
        })
    }
}

fn to_json<T: Serialize>(items: Vec<T>) -> AppResult<Value> {
    Ok(serde_json::to_value(items)?)
}

fn insert_non_empty<T: Serialize>(
    results: &mut Map<String, Value>,
    key: &str,
    items: Vec<T>,
) -> AppResult<()> {
    if !items.is_empty() {
        results.insert(key.to_string(), serde_json::to_value(items)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use conveyor_core::error::ErrorKind;
    use conveyor_database::seeder::{seed_niko_catalogue, NIKO_CLIENT_CODE};
    use conveyor_database::{migration::run_migrations, DatabasePool};

    use super::*;

    async fn seeded() -> CatalogService {
        let db = DatabasePool::in_memory().await.expect("db");
        run_migrations(db.pool()).await.expect("migrate");
        seed_niko_catalogue(db.pool()).await.expect("seed");
        CatalogService::new(db.into_pool())
    }

    #[tokio::test]
    async fn test_unknown_client_is_not_found() {
        let service = seeded().await;
        let err = service.categories("ACME").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Client not found");
    }

    #[tokio::test]
    async fn test_parts_carry_series_and_material() {
        let service = seeded().await;
        let trolleys = service
            .parts::<Trolley>(NIKO_CLIENT_CODE, Some("27.000"))
            .await
            .expect("trolleys");
        assert_eq!(trolleys.len(), 2);
        for trolley in &trolleys {
            let series = trolley.series.as_ref().expect("series attached");
            assert_eq!(series.series_code, "27.000");
            assert!(trolley.material.is_some());
        }

        let value = serde_json::to_value(&trolleys[0]).expect("serialize");
        assert!(value["partNumber"].is_string());
        assert_eq!(value["series"]["seriesCode"], "27.000");
    }

    #[tokio::test]
    async fn test_series_include_material() {
        let service = seeded().await;
        let series = service.series(NIKO_CLIENT_CODE).await.expect("series");
        assert_eq!(series.len(), 14);
        assert!(series.iter().all(|s| s.material.is_some()));
    }

    #[tokio::test]
    async fn test_family_dispatch() {
        let service = seeded().await;
        let bends = service
            .parts_by_family(NIKO_CLIENT_CODE, PartFamily::Bends, Some("21.000"))
            .await
            .expect("bends");
        let bends = bends.as_array().expect("array");
        assert!(!bends.is_empty());
        assert!(bends.iter().all(|b| b["series"]["seriesCode"] == "21.000"));

        let bearings = service
            .parts_by_family(NIKO_CLIENT_CODE, PartFamily::Bearings, None)
            .await
            .expect("bearings");
        assert!(bearings.as_array().is_some_and(|b| !b.is_empty()));
    }

    #[tokio::test]
    async fn test_search_omits_empty_families() {
        let service = seeded().await;
        let results = service
            .search(NIKO_CLIENT_CODE, Some("Guide"), None)
            .await
            .expect("search");
        assert_eq!(results.len(), 1);
        assert_eq!(results["trolleys"].as_array().map(Vec::len), Some(3));

        let none = service
            .search(NIKO_CLIENT_CODE, Some("no-such-part"), None)
            .await
            .expect("search");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_category_filter() {
        let service = seeded().await;
        let all = service
            .search(NIKO_CLIENT_CODE, None, None)
            .await
            .expect("search");
        assert_eq!(all.len(), 4);
        assert_eq!(all["trolleys"].as_array().map(Vec::len), Some(18));
        assert_eq!(all["trackBends"].as_array().map(Vec::len), Some(20));

        let bends = service
            .search(NIKO_CLIENT_CODE, None, Some("bends"))
            .await
            .expect("search");
        assert_eq!(bends.keys().collect::<Vec<_>>(), vec!["trackBends"]);

        let by_key = service
            .search(NIKO_CLIENT_CODE, None, Some("TRACKBENDS"))
            .await
            .expect("search");
        assert_eq!(by_key.len(), 1);

        let unknown = service
            .search(NIKO_CLIENT_CODE, None, Some("widgets"))
            .await
            .expect("search");
        assert!(unknown.is_empty());
    }
}
