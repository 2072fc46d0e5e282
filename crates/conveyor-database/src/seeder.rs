//! NIKO catalogue seeder.
//!
//! The catalogue data lives in `seed/niko.json` and is embedded at compile
//! time. Parts reference their series, material and category by code; the
//! seeder resolves the codes to row ids as it inserts. Seeding is skipped
//! when the client already exists.

use std::collections::HashMap;

use chrono::Utc;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_core::result::AppResult;
use conveyor_entity::catalog::{
    Accessory, BearingOption, Bracket, BridgeInterlock, Category, Client, DropLiftUnit, FlightBar,
    Material, PneumaticControl, ProfileSeries, Stopper, Switch, SwivelUnit, TrackBend,
    TrackProfile, Trolley, TurnTableSwitch,
};

use crate::repositories::{
    CatalogPart, CategoryRepository, ClientRepository, MaterialRepository, PartRepository,
    SeriesRepository,
};

const NIKO_CATALOGUE: &str = include_str!("../seed/niko.json");

/// Code of the client seeded from the embedded catalogue.
pub const NIKO_CLIENT_CODE: &str = "NIKO";

/// Client record as it appears in seed files.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedClient {
    code: String,
    name: String,
    description: Option<String>,
    country: Option<String>,
    website: Option<String>,
    catalogue_reference: Option<String>,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedSeries {
    material_code: Option<String>,
    #[serde(flatten)]
    series: ProfileSeries,
}

/// A part entry with its references expressed as codes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedPart<T> {
    #[serde(default)]
    series_code: Option<String>,
    #[serde(default)]
    material_code: Option<String>,
    #[serde(default)]
    category_code: Option<String>,
    #[serde(flatten)]
    part: T,
}

/// A complete client catalogue.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedCatalogue {
    client: SeedClient,
    categories: Vec<Category>,
    materials: Vec<Material>,
    series: Vec<SeedSeries>,
    #[serde(default)]
    track_profiles: Vec<SeedPart<TrackProfile>>,
    #[serde(default)]
    track_bends: Vec<SeedPart<TrackBend>>,
    #[serde(default)]
    brackets: Vec<SeedPart<Bracket>>,
    #[serde(default)]
    trolleys: Vec<SeedPart<Trolley>>,
    #[serde(default)]
    flight_bars: Vec<SeedPart<FlightBar>>,
    #[serde(default)]
    switches: Vec<SeedPart<Switch>>,
    #[serde(default)]
    turn_table_switches: Vec<SeedPart<TurnTableSwitch>>,
    #[serde(default)]
    stoppers: Vec<SeedPart<Stopper>>,
    #[serde(default)]
    swivel_units: Vec<SeedPart<SwivelUnit>>,
    #[serde(default)]
    bridge_interlocks: Vec<SeedPart<BridgeInterlock>>,
    #[serde(default)]
    drop_lift_units: Vec<SeedPart<DropLiftUnit>>,
    #[serde(default)]
    accessories: Vec<SeedPart<Accessory>>,
    #[serde(default)]
    bearing_options: Vec<SeedPart<BearingOption>>,
    #[serde(default)]
    pneumatic_controls: Vec<SeedPart<PneumaticControl>>,
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalogue was inserted.
    Seeded { parts: usize },
    /// The client already existed; nothing was written.
    AlreadyPresent,
}

/// Code-to-id lookups for one client.
#[derive(Debug, Default)]
struct CodeIndex {
    client_id: i64,
    series: HashMap<String, i64>,
    materials: HashMap<String, i64>,
    categories: HashMap<String, i64>,
}

impl CodeIndex {
    fn resolve(map: &HashMap<String, i64>, code: Option<&str>, what: &str) -> AppResult<Option<i64>> {
        match code {
            None => Ok(None),
            Some(code) => map
                .get(code)
                .copied()
                .map(Some)
                .ok_or_else(|| AppError::validation(format!("Seed data references unknown {what} '{code}'"))),
        }
    }
}

/// Seed the embedded NIKO catalogue if it is not present yet.
pub async fn seed_niko_catalogue(pool: &SqlitePool) -> AppResult<SeedOutcome> {
    seed_catalogue(pool, NIKO_CATALOGUE).await
}

/// Seed a catalogue from its JSON text. Idempotent per client code.
pub async fn seed_catalogue(pool: &SqlitePool, json: &str) -> AppResult<SeedOutcome> {
    let catalogue: SeedCatalogue = serde_json::from_str(json)?;

    if ClientRepository::find_by_code_with(pool, &catalogue.client.code)
        .await?
        .is_some()
    {
        debug!(client = %catalogue.client.code, "Catalogue already seeded");
        return Ok(SeedOutcome::AlreadyPresent);
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

    let index = insert_reference_data(&mut tx, &catalogue).await?;

    let mut parts = 0;
    parts += insert_parts(&mut tx, &index, &catalogue.track_profiles).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.track_bends).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.brackets).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.trolleys).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.flight_bars).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.switches).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.turn_table_switches).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.stoppers).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.swivel_units).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.bridge_interlocks).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.drop_lift_units).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.accessories).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.bearing_options).await?;
    parts += insert_parts(&mut tx, &index, &catalogue.pneumatic_controls).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit seed", e))?;

    info!(
        client = %catalogue.client.code,
        categories = index.categories.len(),
        materials = index.materials.len(),
        series = index.series.len(),
        parts,
        "Catalogue seeded"
    );
    Ok(SeedOutcome::Seeded { parts })
}

async fn insert_reference_data(
    tx: &mut Transaction<'_, Sqlite>,
    catalogue: &SeedCatalogue,
) -> AppResult<CodeIndex> {
    let seed = &catalogue.client;
    let client = Client {
        id: 0,
        code: seed.code.clone(),
        name: seed.name.clone(),
        description: seed.description.clone(),
        country: seed.country.clone(),
        website: seed.website.clone(),
        catalogue_reference: seed.catalogue_reference.clone(),
        is_active: seed.is_active,
        created_at: Utc::now(),
    };
    let mut index = CodeIndex {
        client_id: ClientRepository::create_with(&mut **tx, &client).await?,
        ..CodeIndex::default()
    };

    for category in &catalogue.categories {
        let row = Category {
            client_id: index.client_id,
            ..category.clone()
        };
        let id = CategoryRepository::create_with(&mut **tx, &row).await?;
        index.categories.insert(row.code, id);
    }

    for material in &catalogue.materials {
        let row = Material {
            client_id: index.client_id,
            ..material.clone()
        };
        let id = MaterialRepository::create_with(&mut **tx, &row).await?;
        index.materials.insert(row.code, id);
    }

    for entry in &catalogue.series {
        let row = ProfileSeries {
            client_id: index.client_id,
            material_id: CodeIndex::resolve(
                &index.materials,
                entry.material_code.as_deref(),
                "material",
            )?,
            ..entry.series.clone()
        };
        let id = SeriesRepository::create_with(&mut **tx, &row).await?;
        index.series.insert(row.series_code, id);
    }

    Ok(index)
}

async fn insert_parts<T>(
    tx: &mut Transaction<'_, Sqlite>,
    index: &CodeIndex,
    entries: &[SeedPart<T>],
) -> AppResult<usize>
where
    T: CatalogPart + DeserializeOwned,
{
    for entry in entries {
        let mut part = entry.part.clone();
        let catalog = part.catalog_mut();
        catalog.client_id = index.client_id;
        catalog.series_id =
            CodeIndex::resolve(&index.series, entry.series_code.as_deref(), "series")?;
        catalog.material_id =
            CodeIndex::resolve(&index.materials, entry.material_code.as_deref(), "material")?;
        catalog.category_id =
            CodeIndex::resolve(&index.categories, entry.category_code.as_deref(), "category")?;

        PartRepository::create_with(&mut **tx, &part).await?;
    }
    debug!(family = %T::FAMILY, count = entries.len(), "Seeded part family");
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalogue_parses() {
        let catalogue: SeedCatalogue = serde_json::from_str(NIKO_CATALOGUE).expect("parse");
        assert_eq!(catalogue.client.code, NIKO_CLIENT_CODE);
        assert_eq!(catalogue.categories.len(), 14);
        assert_eq!(catalogue.materials.len(), 6);
        assert_eq!(catalogue.series.len(), 14);
        assert_eq!(catalogue.trolleys.len(), 18);
        assert_eq!(catalogue.track_bends.len(), 25);
    }

    #[test]
    fn test_seed_references_resolve() {
        let catalogue: SeedCatalogue = serde_json::from_str(NIKO_CATALOGUE).expect("parse");
        let series: Vec<&str> = catalogue
            .series
            .iter()
            .map(|s| s.series.series_code.as_str())
            .collect();
        for bend in &catalogue.track_bends {
            let code = bend.series_code.as_deref().expect("bends have a series");
            assert!(series.contains(&code), "unknown series {code}");
            assert_eq!(bend.category_code.as_deref(), Some("BENDS"));
        }
    }

    async fn seeded_pool() -> SqlitePool {
        let db = crate::DatabasePool::in_memory().await.expect("connect");
        crate::migration::run_migrations(db.pool())
            .await
            .expect("migrate");
        let outcome = seed_niko_catalogue(db.pool()).await.expect("seed");
        assert_eq!(outcome, SeedOutcome::Seeded { parts: 171 });
        db.into_pool()
    }

    #[tokio::test]
    async fn test_seeding_twice_is_a_no_op() {
        let pool = seeded_pool().await;
        let again = seed_niko_catalogue(&pool).await.expect("second seed");
        assert_eq!(again, SeedOutcome::AlreadyPresent);

        let clients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(clients, 1);
    }

    #[tokio::test]
    async fn test_part_numbers_unique_per_client() {
        let pool = seeded_pool().await;
        let duplicates: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM (SELECT client_id, part_number FROM trolleys \
             GROUP BY client_id, part_number HAVING COUNT(*) > 1)",
        )
        .fetch_one(&pool)
        .await
        .expect("query");
        assert_eq!(duplicates, 0);

        let client = ClientRepository::new(pool.clone())
            .find_by_code(NIKO_CLIENT_CODE)
            .await
            .expect("find")
            .expect("client exists");
        let mut trolley = PartRepository::new(pool.clone())
            .find_by_client::<Trolley>(client.id, None)
            .await
            .expect("list")
            .remove(0);
        trolley.id = 0;
        let err = PartRepository::create_with(&pool, &trolley)
            .await
            .expect_err("duplicate part number");
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_series_and_angle_filters() {
        let pool = seeded_pool().await;
        let client = ClientRepository::new(pool.clone())
            .find_by_code(NIKO_CLIENT_CODE)
            .await
            .expect("find")
            .expect("client exists");
        let parts = PartRepository::new(pool.clone());

        let bends = parts
            .find_bends(client.id, Some("21.000"), Some(90))
            .await
            .expect("bends");
        let numbers: Vec<&str> = bends.iter().map(|b| b.catalog.part_number.as_str()).collect();
        assert_eq!(numbers, vec!["21.C02", "21.C03", "21.C04", "21.C06"]);

        let trolleys = parts
            .find_by_client::<Trolley>(client.id, Some("27.000"))
            .await
            .expect("trolleys");
        assert_eq!(trolleys.len(), 2);

        let none = parts
            .find_by_client::<Trolley>(client.id, Some("99.000"))
            .await
            .expect("trolleys");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_type_column_and_is_case_sensitive() {
        let pool = seeded_pool().await;
        let client = ClientRepository::new(pool.clone())
            .find_by_code(NIKO_CLIENT_CODE)
            .await
            .expect("find")
            .expect("client exists");
        let parts = PartRepository::new(pool.clone());

        let by_type = parts
            .search::<Trolley>(client.id, "Guide", 20)
            .await
            .expect("search");
        assert_eq!(by_type.len(), 3);

        let lower = parts
            .search::<Trolley>(client.id, "guide", 20)
            .await
            .expect("search");
        assert!(lower.is_empty());

        let limited = parts
            .search::<TrackBend>(client.id, ".C", 5)
            .await
            .expect("search");
        assert_eq!(limited.len(), 5);
    }
}
