//! Domain types shared by the registry client and the tool surface.
//!
//! Every type here is fully defaulted: optional upstream fields are resolved
//! by the registry client before these values are built.

pub mod downloads;
pub mod package;
pub mod search;
pub mod version;

// Re-export all public types
pub use downloads::{DailyDownloads, DownloadPeriod, DownloadStats};
pub use package::{clean_repository_url, PackageInfo, UNKNOWN_LICENSE};
pub use search::SearchResult;
pub use version::{VersionEntry, TIME_SENTINEL_KEYS};
