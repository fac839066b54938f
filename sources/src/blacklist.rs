use std::path::Path;

use keywright_types::Blacklist;
use keywright_utils::read_lines;
use tracing::{debug, warn};

use crate::SourceError;

/// Load the blacklist file. A missing file is an empty blacklist.
pub fn load_blacklist(path: &Path) -> Result<Blacklist, SourceError> {
    match read_lines(path) {
        Ok(Some(text)) => {
            let blacklist = Blacklist::from_lines(&text);
            debug!(path = %path.display(), terms = blacklist.len(), "Loaded blacklist");
            Ok(blacklist)
        }
        Ok(None) => {
            warn!(path = %path.display(), "Blacklist file not found; curating without one");
            Ok(Blacklist::default())
        }
        Err(err) => Err(SourceError::file("failed to read blacklist", path, err)),
    }
}
