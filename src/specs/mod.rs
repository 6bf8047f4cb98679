// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the site: *where the ground truth lives in the
//! markup* and *how to read it*. A spec takes an already-loaded document
//! snapshot (`scraper::Html`) and returns typed data; it never loads pages.
//!
//! ## What lives here
//! - **Selector choice** for each field, kept next to the parsing code so a
//!   markup change is a one-file fix.
//! - **Failure policy per field**: required fields raise
//!   `ExtractError::StructuralMismatch`; optional fields quietly become `None`.
//!
//! ## What does **not** live here
//! - **Loading / navigation** – `driver` and the loop in `scrape`.
//! - **Persistence** – `store`.
//! - **Display heuristics** (alias titles, release year, stars) – `render`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect → driver.load / navigate
//!                       ↘ specs::listing::parse_page(&Html)
//!                                 ↘ Vec<Record> + next href
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against captured markup; keep fixtures close to
//! what the site serves (indentation, `&nbsp;`, nested `<em>`).
pub mod listing;
