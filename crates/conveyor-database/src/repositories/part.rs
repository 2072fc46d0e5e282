//! Generic repository for the fourteen part families.
//!
//! Every family table shares the [`CatalogRef`] columns, so one set of
//! queries serves all of them. Each entity describes its own table and
//! extra columns through [`CatalogPart`].

use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::sqlite::{Sqlite, SqliteExecutor, SqliteRow};
use sqlx::{FromRow, QueryBuilder, SqlitePool};

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_core::result::AppResult;
use conveyor_entity::catalog::{
    Accessory, BearingOption, Bracket, BridgeInterlock, CatalogRef, DropLiftUnit, FlightBar,
    PartFamily, PneumaticControl, Stopper, Switch, SwivelUnit, TrackBend, TrackProfile, Trolley,
    TurnTableSwitch,
};

use super::insert_error;

/// Columns shared by every part table, in bind order.
const REF_COLUMNS: [&str; 6] = [
    "client_id",
    "part_number",
    "series_id",
    "material_id",
    "category_id",
    "price",
];

/// A row type stored in one of the part family tables.
pub trait CatalogPart:
    for<'r> FromRow<'r, SqliteRow> + Serialize + Clone + Send + Sync + Unpin + 'static
{
    /// Family this row belongs to.
    const FAMILY: PartFamily;
    /// Backing table.
    const TABLE: &'static str;
    /// Free-text type column that product search also matches.
    const TYPE_COLUMN: Option<&'static str>;
    /// Family-specific columns, in the order [`CatalogPart::bind_columns`] binds them.
    const COLUMNS: &'static [&'static str];

    fn catalog(&self) -> &CatalogRef;

    fn catalog_mut(&mut self) -> &mut CatalogRef;

    /// Push one bind per entry of [`CatalogPart::COLUMNS`].
    fn bind_columns<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>);
}

macro_rules! catalog_part {
    (
        $ty:ty, $family:expr, $table:literal, $type_column:expr,
        [$($field:ident),* $(,)?]
    ) => {
        impl CatalogPart for $ty {
            const FAMILY: PartFamily = $family;
            const TABLE: &'static str = $table;
            const TYPE_COLUMN: Option<&'static str> = $type_column;
            const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn catalog(&self) -> &CatalogRef {
                &self.catalog
            }

            fn catalog_mut(&mut self) -> &mut CatalogRef {
                &mut self.catalog
            }

            fn bind_columns<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>) {
                $( row.push_bind(self.$field.clone()); )*
            }
        }
    };
}

catalog_part!(TrackProfile, PartFamily::TrackProfiles, "track_profiles", None,
    [length_mm, price_per_meter]);
catalog_part!(TrackBend, PartFamily::Bends, "track_bends", None,
    [angle_degrees, radius_mm, dimension_a_mm, total_length_mm]);
catalog_part!(Bracket, PartFamily::Brackets, "brackets", Some("bracket_type"),
    [bracket_type, length_mm, height_mm, width_mm, wall_thickness_mm, hole_diameter_mm,
     thread_size, max_adjustment_mm]);
catalog_part!(Trolley, PartFamily::Trolleys, "trolleys", Some("trolley_type"),
    [trolley_type, wheel_count, safe_working_load_kg, length_mm, height_mm, width_mm,
     hole_diameter_mm, thread_size, has_rotating_screw, has_guide_rollers]);
catalog_part!(FlightBar, PartFamily::Flightbars, "flight_bars", None,
    [flight_bar_type, safe_working_load_kg, length_mm, span_mm, height_mm,
     eye_nut_diameter_mm, has_rotating_eye_nut]);
catalog_part!(Switch, PartFamily::Switches, "switches", Some("switch_type"),
    [switch_type, operation_type, radius_mm, width_mm, length_mm, angle_degrees,
     is_automatic, is_pneumatic, includes_cylinder]);
catalog_part!(Stopper, PartFamily::Stoppers, "stoppers", None,
    [stopper_type, tongue_type, length_mm, height_mm, is_pneumatic, is_spring_loaded]);
catalog_part!(SwivelUnit, PartFamily::SwivelUnits, "swivel_units", None,
    [swivel_type, direction, l1_mm, l2_mm, l3_mm, is_pneumatic, is_spring_loaded]);
catalog_part!(BridgeInterlock, PartFamily::BridgeInterlocks, "bridge_interlocks", None,
    [part_type, width_mm, height_mm, length_mm, min_height_mm, max_height_mm]);
catalog_part!(DropLiftUnit, PartFamily::DropLifts, "drop_lift_units", None,
    [lift_type, min_track_length_mm, approach_length_mm, height_mm, width_mm,
     safe_working_load_kg]);
catalog_part!(Accessory, PartFamily::Accessories, "accessories", None,
    [accessory_type, description, length_mm, height_mm, width_mm]);
catalog_part!(BearingOption, PartFamily::Bearings, "bearing_options", None,
    [bearing_type, min_temperature_c, max_temperature_c, description]);
catalog_part!(TurnTableSwitch, PartFamily::Turntables, "turntable_switches", None,
    [switch_type, dimension_a_mm, dimension_b_mm, profile_height_mm, operation_type,
     support_points]);
catalog_part!(PneumaticControl, PartFamily::Pneumatics, "pneumatic_controls", None,
    [control_type, description, way_count, tube_length_m]);

/// Repository for part family rows.
#[derive(Debug, Clone)]
pub struct PartRepository {
    pool: SqlitePool,
}

impl PartRepository {
    /// Create a new part repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a part and return its id.
    pub async fn create_with<'e, T, E>(executor: E, part: &T) -> AppResult<i64>
    where
        T: CatalogPart,
        E: SqliteExecutor<'e>,
    {
        let mut qb = QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (", T::TABLE));
        {
            let mut columns = qb.separated(", ");
            for column in REF_COLUMNS.iter().chain(T::COLUMNS) {
                columns.push(*column);
            }
        }
        qb.push(") VALUES (");
        {
            let catalog = part.catalog();
            let mut values = qb.separated(", ");
            values
                .push_bind(catalog.client_id)
                .push_bind(catalog.part_number.clone())
                .push_bind(catalog.series_id)
                .push_bind(catalog.material_id)
                .push_bind(catalog.category_id)
                .push_bind(catalog.price);
            part.bind_columns(&mut values);
        }
        qb.push(") RETURNING id");

        qb.build_query_scalar::<i64>()
            .fetch_one(executor)
            .await
            .map_err(|e| insert_error(e, T::FAMILY.slug()))
    }

    /// List a client's parts, optionally restricted to one series code.
    pub async fn find_by_client<T: CatalogPart>(
        &self,
        client_id: i64,
        series_code: Option<&str>,
    ) -> AppResult<Vec<T>> {
        let mut qb = select_parts::<T>(client_id, series_code);
        qb.push(" ORDER BY part_number ASC");

        qb.build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list {}", T::FAMILY),
                    e,
                )
            })
    }

    /// List track bends with optional series and exact angle filters.
    pub async fn find_bends(
        &self,
        client_id: i64,
        series_code: Option<&str>,
        angle_degrees: Option<i32>,
    ) -> AppResult<Vec<TrackBend>> {
        let mut qb = select_parts::<TrackBend>(client_id, series_code);
        if let Some(angle) = angle_degrees {
            qb.push(" AND angle_degrees = ").push_bind(angle);
        }
        qb.push(" ORDER BY part_number ASC");

        qb.build_query_as::<TrackBend>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bends", e))
    }

    /// Case-sensitive substring search on part number and, where the family
    /// has one, its type column.
    pub async fn search<T: CatalogPart>(
        &self,
        client_id: i64,
        term: &str,
        limit: i64,
    ) -> AppResult<Vec<T>> {
        let mut qb =
            QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {} WHERE client_id = ", T::TABLE));
        qb.push_bind(client_id);
        qb.push(" AND (instr(part_number, ").push_bind(term.to_string()).push(") > 0");
        if let Some(column) = T::TYPE_COLUMN {
            qb.push(format!(" OR instr({column}, "))
                .push_bind(term.to_string())
                .push(") > 0");
        }
        qb.push(") ORDER BY part_number ASC LIMIT ").push_bind(limit);

        qb.build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to search {}", T::FAMILY),
                    e,
                )
            })
    }
}

fn select_parts<T: CatalogPart>(
    client_id: i64,
    series_code: Option<&str>,
) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {} WHERE client_id = ", T::TABLE));
    qb.push_bind(client_id);
    if let Some(code) = series_code {
        qb.push(" AND series_id IN (SELECT id FROM profile_series WHERE client_id = ")
            .push_bind(client_id)
            .push(" AND series_code = ")
            .push_bind(code.to_string())
            .push(")");
    }
    qb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_do_not_repeat_shared_block() {
        fn check<T: CatalogPart>() {
            for column in T::COLUMNS {
                assert!(!REF_COLUMNS.contains(column), "{} repeats {column}", T::TABLE);
            }
        }
        check::<TrackProfile>();
        check::<TrackBend>();
        check::<Bracket>();
        check::<Trolley>();
        check::<FlightBar>();
        check::<Switch>();
        check::<Stopper>();
        check::<SwivelUnit>();
        check::<BridgeInterlock>();
        check::<DropLiftUnit>();
        check::<Accessory>();
        check::<BearingOption>();
        check::<TurnTableSwitch>();
        check::<PneumaticControl>();
    }

    #[test]
    fn test_search_columns() {
        assert_eq!(Trolley::TYPE_COLUMN, Some("trolley_type"));
        assert_eq!(TrackBend::TYPE_COLUMN, None);
        assert_eq!(Switch::FAMILY, PartFamily::Switches);
    }
}
