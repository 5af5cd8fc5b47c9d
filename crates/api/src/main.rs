#[tokio::main]
async fn main() {
    reserva_observability::init();

    let bind_addr =
        std::env::var("RESERVA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = reserva_api::app::build_in_memory_app();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
