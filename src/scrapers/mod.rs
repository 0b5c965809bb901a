//! Forum scrapers.
//!
//! | Forum | Module | Method | Notes |
//! |-------|--------|--------|-------|
//! | Discourse | [`discourse`] | HTML scraping | Category page topic list; selector is theme-dependent |
//!
//! A scraper fetches one page per call, extracts what it can, and logs
//! rather than fails when the page cannot be fetched.

pub mod discourse;
