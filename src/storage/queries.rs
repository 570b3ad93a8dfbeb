use crate::error::Result;
use crate::storage::models::EmergencySettings;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension};

// Emergency settings queries

/// Set both hide flags on the settings row. Returns the number of rows touched.
pub fn enable_all_protections(conn: &Connection, id: i64) -> Result<usize> {
    let updated = conn.execute(
        r#"
        UPDATE emergency_settings
        SET hide_green_emoji = 1, hide_eur_symbol = 1
        WHERE id = ?1
        "#,
        params![id],
    )?;
    Ok(updated)
}

pub fn get_emergency_settings(conn: &Connection, id: i64) -> Result<Option<EmergencySettings>> {
    let settings = conn
        .query_row(
            r#"
            SELECT hide_green_emoji, hide_eur_symbol
            FROM emergency_settings
            WHERE id = ?1
            "#,
            params![id],
            |row| {
                Ok(EmergencySettings {
                    hide_green_emoji: is_on(&row.get::<_, Value>(0)?),
                    hide_eur_symbol: is_on(&row.get::<_, Value>(1)?),
                })
            },
        )
        .optional()?;
    Ok(settings)
}

/// A flag is on only when it holds the number 1, whatever the column affinity.
fn is_on(value: &Value) -> bool {
    match value {
        Value::Integer(i) => *i == 1,
        Value::Real(r) => *r == 1.0,
        _ => false,
    }
}
