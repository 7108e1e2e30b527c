//! On-disk layout files.
//!
//! A layout directory holds one `<file token>.txt` per protocol, in the
//! field-list notation understood by
//! [`parse_layout`](sniffdef_core::schema::layout::parse_layout). Each file
//! found replaces the built-in layout for the configured versions and
//! encoding; protocols without a file keep the built-in one.

use std::path::Path;

use tracing::{debug, info};

use sniffdef_core::protocol::file_token;
use sniffdef_core::schema::layout::parse_layout;
use sniffdef_core::{Encoding, Protocol, SchemaKey, SchemaRegistry, SchemaVersion};

use crate::error::{Error, Result};

/// Load layout files from `dir` into `registry`.
///
/// A file that fails to parse or validate rejects only its own schema; the
/// registry records why. Returns the number of layouts accepted.
pub fn load_layouts(
    registry: &mut SchemaRegistry,
    dir: &Path,
    protocols: &[Protocol],
    versions: &[SchemaVersion],
    encoding: Encoding,
) -> Result<usize> {
    let mut loaded = 0;

    for &protocol in protocols {
        let path = dir.join(format!("{}.txt", file_token(protocol, encoding)));
        if !path.is_file() {
            debug!(path = %path.display(), "no layout file, keeping built-in");
            continue;
        }

        let text = std::fs::read_to_string(&path).map_err(|source| Error::Layout {
            path: path.clone(),
            source,
        })?;

        for version in versions {
            let key = SchemaKey::new(protocol, version.clone(), encoding);
            let accepted = match parse_layout(&text) {
                Ok(fields) => registry.register(key, fields).is_ok(),
                Err(reason) => {
                    registry.reject(key, reason);
                    false
                }
            };
            if accepted {
                debug!(path = %path.display(), %version, "loaded layout");
                loaded += 1;
            }
        }
    }

    info!(dir = %dir.display(), loaded, "layout directory processed");
    Ok(loaded)
}
