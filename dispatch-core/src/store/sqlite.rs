//! SQLite-backed store for submitted orders and vehicles.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use rusqlite::{Connection, Error as SqliteError, Transaction, params};
use thiserror::Error;

use crate::{Order, Priority, Vehicle};

use super::DispatchStore;

const CREATE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS delivery_orders (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id TEXT NOT NULL UNIQUE,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        address TEXT NOT NULL,
        package_weight REAL NOT NULL,
        priority TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS vehicles (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_id TEXT NOT NULL UNIQUE,
        capacity REAL NOT NULL,
        current_latitude REAL NOT NULL,
        current_longitude REAL NOT NULL,
        current_address TEXT NOT NULL
    );
";

// Upserts keep `seq`, so a re-submitted id retains its submission position.
const UPSERT_ORDER: &str = "
    INSERT INTO delivery_orders (order_id, latitude, longitude, address, package_weight, priority)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(order_id) DO UPDATE SET
        latitude = excluded.latitude,
        longitude = excluded.longitude,
        address = excluded.address,
        package_weight = excluded.package_weight,
        priority = excluded.priority
";

const UPSERT_VEHICLE: &str = "
    INSERT INTO vehicles
        (vehicle_id, capacity, current_latitude, current_longitude, current_address)
    VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(vehicle_id) DO UPDATE SET
        capacity = excluded.capacity,
        current_latitude = excluded.current_latitude,
        current_longitude = excluded.current_longitude,
        current_address = excluded.current_address
";

const SELECT_ORDERS: &str = "
    SELECT order_id, latitude, longitude, address, package_weight, priority
    FROM delivery_orders ORDER BY seq
";

const SELECT_VEHICLES: &str = "
    SELECT vehicle_id, capacity, current_latitude, current_longitude, current_address
    FROM vehicles ORDER BY seq
";

/// Error raised when reading or writing the dispatch database.
#[derive(Debug, Error)]
pub enum SqliteDispatchStoreError {
    /// Creating the parent directory for the database failed.
    #[error("failed to create parent directory {path}: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Creating the dispatch tables failed.
    #[error("failed to create dispatch schema: {source}")]
    CreateSchema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Writing a row failed.
    #[error("failed to persist {kind} {id}: {source}")]
    PersistRow {
        /// `"order"` or `"vehicle"`.
        kind: &'static str,
        /// Identifier of the row being written.
        id: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// A stored priority did not name a known class.
    #[error("order {order_id} has unknown priority {value:?}")]
    InvalidPriority {
        /// Order carrying the bad value.
        order_id: String,
        /// Stored text.
        value: String,
    },
    /// Generic SQLite error when preparing, reading or committing.
    #[error(transparent)]
    Database(#[from] SqliteError),
}

/// Dispatch store persisted in a single SQLite file.
///
/// Each call opens its own connection, so the store is `Send + Sync` and
/// every listing is a fresh snapshot.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{DispatchStore, Order, Priority, SqliteDispatchStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let store = SqliteDispatchStore::open(dir.path().join("dispatch.db"))?;
/// store.save_orders(&[Order::new("ORD1", Coord { x: 0.0, y: 0.0 }, 5.0, Priority::High)])?;
/// assert_eq!(store.list_orders()?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SqliteDispatchStore {
    path: PathBuf,
}

impl SqliteDispatchStore {
    /// Open (creating if needed) the database at `path` and ensure the
    /// dispatch tables exist.
    pub fn open<P>(path: P) -> Result<Self, SqliteDispatchStoreError>
    where
        P: AsRef<Path>,
    {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.ensure_parent_dir()?;
        let connection = store.connect()?;
        connection
            .execute_batch(CREATE_SCHEMA)
            .map_err(|source| SqliteDispatchStoreError::CreateSchema { source })?;
        Ok(store)
    }

    /// Location of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert or replace orders in one transaction.
    pub fn save_orders(&self, orders: &[Order]) -> Result<(), SqliteDispatchStoreError> {
        let mut connection = self.connect()?;
        let transaction = connection.transaction()?;
        persist_orders(&transaction, orders)?;
        transaction.commit()?;
        log::debug!(
            "persisted {} orders to {}",
            orders.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Insert or replace vehicles in one transaction.
    pub fn save_vehicles(&self, vehicles: &[Vehicle]) -> Result<(), SqliteDispatchStoreError> {
        let mut connection = self.connect()?;
        let transaction = connection.transaction()?;
        persist_vehicles(&transaction, vehicles)?;
        transaction.commit()?;
        log::debug!(
            "persisted {} vehicles to {}",
            vehicles.len(),
            self.path.display()
        );
        Ok(())
    }

    fn connect(&self) -> Result<Connection, SqliteDispatchStoreError> {
        Connection::open(&self.path).map_err(|source| SqliteDispatchStoreError::OpenDatabase {
            path: self.path.clone(),
            source,
        })
    }

    fn ensure_parent_dir(&self) -> Result<(), SqliteDispatchStoreError> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|source| {
            SqliteDispatchStoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            }
        })
    }
}

impl DispatchStore for SqliteDispatchStore {
    type Error = SqliteDispatchStoreError;

    fn list_orders(&self) -> Result<Vec<Order>, Self::Error> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(SELECT_ORDERS)?;
        let mut rows = statement.query([])?;
        let mut orders = Vec::new();

        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let priority_text: String = row.get(5)?;
            let priority = Priority::from_str(&priority_text).map_err(|_| {
                SqliteDispatchStoreError::InvalidPriority {
                    order_id: id.clone(),
                    value: priority_text.clone(),
                }
            })?;
            orders.push(Order {
                id,
                latitude: row.get(1)?,
                longitude: row.get(2)?,
                address: row.get(3)?,
                package_weight: row.get(4)?,
                priority,
            });
        }

        Ok(orders)
    }

    fn list_vehicles(&self) -> Result<Vec<Vehicle>, Self::Error> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(SELECT_VEHICLES)?;
        let mut rows = statement.query([])?;
        let mut vehicles = Vec::new();

        while let Some(row) = rows.next()? {
            vehicles.push(Vehicle {
                id: row.get(0)?,
                capacity: row.get(1)?,
                current_latitude: row.get(2)?,
                current_longitude: row.get(3)?,
                current_address: row.get(4)?,
            });
        }

        Ok(vehicles)
    }
}

fn persist_orders(
    transaction: &Transaction<'_>,
    orders: &[Order],
) -> Result<(), SqliteDispatchStoreError> {
    let mut statement = transaction.prepare(UPSERT_ORDER)?;
    for order in orders {
        statement
            .execute(params![
                order.id,
                order.latitude,
                order.longitude,
                order.address,
                order.package_weight,
                order.priority.as_str(),
            ])
            .map_err(|source| SqliteDispatchStoreError::PersistRow {
                kind: "order",
                id: order.id.clone(),
                source,
            })?;
    }
    Ok(())
}

fn persist_vehicles(
    transaction: &Transaction<'_>,
    vehicles: &[Vehicle],
) -> Result<(), SqliteDispatchStoreError> {
    let mut statement = transaction.prepare(UPSERT_VEHICLE)?;
    for vehicle in vehicles {
        statement
            .execute(params![
                vehicle.id,
                vehicle.capacity,
                vehicle.current_latitude,
                vehicle.current_longitude,
                vehicle.current_address,
            ])
            .map_err(|source| SqliteDispatchStoreError::PersistRow {
                kind: "vehicle",
                id: vehicle.id.clone(),
                source,
            })?;
    }
    Ok(())
}
