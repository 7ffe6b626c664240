//! CSV and JSON exporters
//!
//! Both are single-pass, stateless transformations of the joined user list.
//! The output shapes are a compatibility contract with existing consumers:
//! column order, key names, boolean casing, and timestamp format are fixed.

use std::io::Write;

use serde_json::json;

use crate::domain::result::Result;
use crate::domain::time;
use crate::domain::UserWithMfaDevice;

const CSV_COLUMNS: [&str; 9] = [
    "Active",
    "UserId",
    "UserName",
    "DisplayName",
    "Email",
    "EmailVerificationStatus",
    "MfaDeviceCount",
    "CreatedAt",
    "UpdatedAt",
];

/// Write the fixed-column CSV projection
///
/// `MfaDeviceCount` is the device count; CSV cannot carry the nested list.
/// Booleans render `True`/`False` for compatibility with the previous
/// exporter's consumers.
pub fn export_csv<W: Write>(users: &[UserWithMfaDevice], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_COLUMNS)?;

    for user in users {
        csv_writer.write_record([
            bool_str(user.active).to_string(),
            user.user_id.clone(),
            user.user_name.clone(),
            user.display_name.clone(),
            user.email.clone(),
            user.email_verification_status.clone(),
            user.mfa_devices.len().to_string(),
            time::format_timestamp(&user.created_at),
            time::format_timestamp(&user.updated_at),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the full nested dump under a top-level `Users` key
///
/// Pretty-printed with 2-space indentation; non-ASCII characters are
/// preserved literally; no trailing newline.
pub fn export_json<W: Write>(users: &[UserWithMfaDevice], mut writer: W) -> Result<()> {
    let envelope = json!({ "Users": users });
    let rendered = serde_json::to_string_pretty(&envelope)?;
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
