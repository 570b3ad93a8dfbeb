use crate::error::{AppError, Result};
use crate::storage::{self, EmergencySettings, EMERGENCY_SETTINGS_ID};
use std::path::Path;
use tracing::{debug, info, warn};

/// Turn on both emergency protections and read them back.
///
/// The row with id 1 must already exist. When it does not, the update is a
/// no-op and [`AppError::Verification`] is returned; nothing is inserted.
pub fn enable_yolo_mode(db_path: &Path) -> Result<EmergencySettings> {
    storage::with_db_mut(db_path, |conn| {
        let tx = conn.transaction()?;
        let updated = storage::enable_all_protections(&tx, EMERGENCY_SETTINGS_ID)?;
        tx.commit()?;
        debug!("Updated {} emergency_settings row(s)", updated);

        if updated == 0 {
            warn!(
                "No emergency_settings row with id = {}, nothing was updated",
                EMERGENCY_SETTINGS_ID
            );
        }

        info!("Verifying emergency settings");
        let settings = storage::get_emergency_settings(conn, EMERGENCY_SETTINGS_ID)?.ok_or(
            AppError::Verification {
                id: EMERGENCY_SETTINGS_ID,
            },
        )?;

        info!(
            "Emergency settings now hide_green_emoji={} hide_eur_symbol={}",
            settings.hide_green_emoji, settings.hide_eur_symbol
        );
        Ok(settings)
    })
}
