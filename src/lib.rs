//! Table-of-contents builder for Markdown blog posts.
//!
//! [`domain::toc::build_toc`] nests a flat heading list into a tree,
//! [`domain::scroll::resolve_scroll_target`] maps heading positions onto the
//! preview rendering, and [`application::outline::OutlineService`] extracts
//! headings from Markdown with comrak.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
