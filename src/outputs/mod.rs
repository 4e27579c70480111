//! Output generation for the daily note.
//!
//! # Submodules
//!
//! - [`markdown`]: renders the note and writes `nota_<YYYYMMDD>.md`
//! - [`json`]: optional JSON copy of the note with sentiment verdicts
//! - [`indexes`]: optional `index.md` listing every published note
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── index.md            # only with update_index
//! ├── nota_20261017.md
//! └── nota_20261018.md
//!
//! json_output_dir/
//! └── nota_20261018.json
//! ```

pub mod indexes;
pub mod json;
pub mod markdown;
