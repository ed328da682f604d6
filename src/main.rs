use copyright_server::common::verdict;
use copyright_server::config;
use copyright_server::logger::Logger;
use copyright_server::models::AppState;
use copyright_server::router;
use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    println!("copyright_server: starting v{}", env!("CARGO_PKG_VERSION"));
    let conf = config::load();
    let logger = Logger::new(&conf.watchtower);
    let verdict = verdict::from_config(&conf);

    let shared_state = Arc::new(AppState {
        conf: conf.clone(),
        logger,
        verdict,
    });

    let cors = CorsLayer::new().allow_headers(Any).allow_origin(Any);
    let app = router::routes().with_state(shared_state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], conf.server.port));
    println!("server: listening on http://0.0.0.0:{}", conf.server.port);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
