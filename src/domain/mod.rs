//! Domain layer: headings, table-of-contents trees and scroll targets.

pub mod scroll;
pub mod slug;
pub mod toc;
