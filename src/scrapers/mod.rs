//! Source scrapers.
//!
//! Every configured source is a plain web page scraped the same way, by
//! [`headlines`]:
//!
//! 1. **Fetching**: one GET with a desktop browser user agent
//! 2. **Extraction**: heading elements paired with the paragraph that follows
//!
//! A source that cannot be fetched is logged and contributes no articles; the
//! remaining sources are still scraped.

pub mod headlines;
