//! Presentation layer: text and JSON renderings of a table of contents.

pub mod toc;
