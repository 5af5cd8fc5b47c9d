use axum::http::StatusCode;
use chrono::Local;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Current server time, formatted `dd.MM.yyyy HH:mm:ss`.
pub async fn datetime() -> String {
    Local::now().format("%d.%m.%Y %H:%M:%S").to_string()
}
