use std::sync::Arc;

use tracing::{info, warn};

use corkage_server::calendar::AvailabilityCalendar;
use corkage_server::config::ServerConfig;
use corkage_server::holidays::{HolidayClient, HolidaySource, StaticHolidays};
use corkage_server::logging;
use corkage_server::search::{KakaoConfig, KakaoPlacesClient};
use corkage_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = ServerConfig::from_env()?;

    // Holiday source: local fixture if configured, otherwise the public API
    let holidays: Arc<dyn HolidaySource> = match &config.holiday_data_file {
        Some(path) => {
            let fixture = StaticHolidays::from_file(path)?;
            info!(path = %path.display(), count = fixture.len(), "serving holidays from file");
            Arc::new(fixture)
        }
        None => {
            info!(
                base_url = %config.holidays.base_url,
                country = %config.holidays.country_code,
                "serving holidays from API"
            );
            Arc::new(HolidayClient::new(config.holidays.clone())?)
        }
    };

    let calendar = AvailabilityCalendar::new(holidays).with_timeout(config.holiday_timeout());
    let mut state = AppState::new(calendar);

    match &config.kakao_api_key {
        Some(key) => {
            let client = KakaoPlacesClient::new(KakaoConfig::new(key))?;
            state = state.with_places(Arc::new(client));
        }
        None => warn!("KAKAO_REST_API_KEY not set, place search disabled"),
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "corkage server listening");
    info!("  GET  /health");
    info!("  GET  /api/proximity");
    info!("  GET  /api/marker-size");
    info!("  GET  /api/calendar");
    info!("  POST /api/reservations");
    info!("  GET  /api/places/search");

    axum::serve(listener, app).await?;
    Ok(())
}
