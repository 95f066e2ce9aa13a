//! JSON output.
//!
//! Results are printed as the service's own shapes, so scripts can feed them
//! back into other tools unchanged.

use serde::Serialize;

use crate::error::Result;

/// Render any value as JSON.
pub fn render_json<T: Serialize + ?Sized>(output: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(json)
}
