use crate::error::AppError;
use crate::storage::{EmergencySettings, Protection};
use std::io::{self, Write};

pub fn write_success(out: &mut impl Write, settings: &EmergencySettings) -> io::Result<()> {
    writeln!(out, "✅ YOLO MODE ENABLED!")?;
    writeln!(
        out,
        "   🟢 Hide Green Emoji: {}",
        Protection::from(settings.hide_green_emoji)
    )?;
    writeln!(
        out,
        "   💶 Hide EUR Symbol: {}",
        Protection::from(settings.hide_eur_symbol)
    )?;
    writeln!(out)?;

    if settings.is_yolo_mode() {
        writeln!(out, "⚡ Both protections are now ACTIVE!")?;
    } else {
        writeln!(out, "⚠️  Not all protections are active!")?;
    }

    Ok(())
}

pub fn write_json(out: &mut impl Write, settings: &EmergencySettings) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, settings)?;
    writeln!(out)
}

pub fn write_failure(out: &mut impl Write, error: &AppError) -> io::Result<()> {
    if error.is_verification() {
        writeln!(out, "❌ Failed to verify settings")
    } else {
        writeln!(out, "❌ Error: {}", error)
    }
}
