//! Test helpers for writing submission fixtures.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn order_json(id: &str, lon: f64, lat: f64, weight: f64, priority: &str) -> Value {
    json!({
        "orderId": id,
        "latitude": lat,
        "longitude": lon,
        "address": format!("{id} drop-off"),
        "packageWeight": weight,
        "priority": priority,
    })
}

pub(super) fn vehicle_json(id: &str, capacity: f64, lon: f64, lat: f64) -> Value {
    json!({
        "vehicleId": id,
        "capacity": capacity,
        "currentLatitude": lat,
        "currentLongitude": lon,
        "currentAddress": format!("{id} depot"),
    })
}

pub(super) fn write_orders(path: &Utf8Path, orders: &[Value]) {
    let payload = serde_json::to_vec(&json!({ "orders": orders })).expect("encode orders");
    write_utf8(path, &payload);
}

pub(super) fn write_vehicles(path: &Utf8Path, vehicles: &[Value]) {
    let payload = serde_json::to_vec(&json!({ "vehicles": vehicles })).expect("encode vehicles");
    write_utf8(path, &payload);
}
