use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_booking::{build_router, config::Config, AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Seat Booking API: {}x{} seats, up to {} per booking",
        config.booking.rows, config.booking.seats_per_row, config.booking.max_seats_per_booking
    );

    // Хранилище + восстановление проданных мест
    let app_state = AppState::new(config.clone()).await;

    let app = build_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.app.host, config.app.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
