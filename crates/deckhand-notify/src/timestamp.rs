use chrono::Utc;
use chrono_tz::Tz;
use tracing::warn;

const DISPLAY_ZONE: &str = "Asia/Tokyo";
const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render "now" for deploy comments, preferring the fixed display zone.
/// Falls back to UTC when the zone cannot be resolved; never fails.
pub fn deploy_timestamp() -> String {
    let now = Utc::now();
    match DISPLAY_ZONE.parse::<Tz>() {
        Ok(tz) => format!("{} (JST)", now.with_timezone(&tz).format(FORMAT)),
        Err(_) => {
            warn!("time zone data for {DISPLAY_ZONE} not found, using UTC");
            format!("{} (UTC)", now.format(FORMAT))
        }
    }
}
