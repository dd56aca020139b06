//! Fixed station data for mock mode.
//!
//! Two stations in Buin, Región Metropolitana, in the legacy price
//! schema. Useful for exercising the finder without reaching the API.

use serde_json::json;

use crate::domain::StationRecord;

/// The mock-mode stations.
///
/// - `1001` COPEC, 93 at 1290, with an inline store object.
/// - `1002` SHELL, 93 at 1285, no store information.
pub fn fixture_stations() -> Vec<StationRecord> {
    let stations = json!([
        {
            "CodEs": "1001",
            "Compania": "COPEC",
            "Direccion": "Av. Principal 123",
            "Comuna": "Buin",
            "Region": "RM",
            "Latitud": "-33.7335",
            "Longitud": "-70.7422",
            "Prices": [
                {"Producto": "Gasolina 93", "Precio": "1290"},
                {"Producto": "Gasolina 95", "Precio": "1340"},
                {"Producto": "Diésel", "Precio": "1090"},
            ],
            "Tienda": {"NombreTienda": "Pronto Copec"},
        },
        {
            "CodEs": "1002",
            "Compania": "SHELL",
            "Direccion": "Ruta 5 KM 45",
            "Comuna": "Buin",
            "Region": "RM",
            "Latitud": "-33.6500",
            "Longitud": "-70.7200",
            "Prices": [
                {"Producto": "Gasolina 93", "Precio": "1285"},
                {"Producto": "Gasolina 95", "Precio": "1335"},
                {"Producto": "Diésel", "Precio": "1080"},
            ],
        },
    ]);
    super::convert::station_list(stations)
}
