use chrono::NaiveDate;

use crate::response::ApiError;

/// Strict `YYYY-MM-DD` calendar-date validation.
///
/// Invalid input fails here with a 400 and never reaches the store.
pub fn parse_fecha(fecha: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(fecha, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request("Formato de fecha inválido. Use YYYY-MM-DD."))
}
