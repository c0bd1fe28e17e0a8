//! Markdown outline pipeline: parse a post, extract its headings and nest
//! them into a table of contents.

mod config;
mod extract;

use comrak::{Arena, parse_document};
use tracing::debug;

use crate::domain::{
    scroll::{ScrollMode, ScrollTarget},
    toc::{Heading, TocBuilder, TocNode},
};

use config::default_options;
use extract::extract_headings;

/// Headings of a document alongside the tree built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub headings: Vec<Heading>,
    pub toc: Vec<TocNode>,
}

/// Comrak-backed outline extraction.
pub struct OutlineService {
    options: comrak::Options<'static>,
    builder: TocBuilder,
}

impl OutlineService {
    pub fn new(scroll_mode: ScrollMode) -> Self {
        Self {
            options: default_options(),
            builder: TocBuilder::new(scroll_mode),
        }
    }

    pub fn builder(&self) -> TocBuilder {
        self.builder
    }

    /// Headings of `markdown` in document order, including the level-1 title.
    pub fn extract(&self, markdown: &str) -> Vec<Heading> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);
        extract_headings(root, markdown)
    }

    pub fn outline(&self, markdown: &str) -> Outline {
        let headings = self.extract(markdown);
        let toc = self.builder.build(&headings);
        debug!(
            headings = headings.len(),
            roots = toc.len(),
            entries = TocNode::count(&toc),
            scroll_mode = ?self.builder.scroll_mode(),
            "built table of contents"
        );
        Outline { headings, toc }
    }

    /// Scroll target for the heading `id`, if the table of contents lists it.
    pub fn scroll_target(&self, outline: &Outline, id: &str, markdown: &str) -> Option<ScrollTarget> {
        TocNode::find(&outline.toc, id).map(|node| self.builder.scroll_target(node, markdown))
    }
}

impl Default for OutlineService {
    fn default() -> Self {
        Self::new(ScrollMode::Direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "Weekend notes\n\n# Weekend notes\n\n## Morning\n\n### Coffee\n\n## Evening\n";

    #[test]
    fn outline_skips_title_and_nests_sections() {
        let outline = OutlineService::default().outline(POST);

        assert_eq!(outline.headings.len(), 4);
        let roots: Vec<&str> = outline.toc.iter().map(TocNode::id).collect();
        assert_eq!(roots, vec!["morning", "evening"]);
        assert_eq!(outline.toc[0].children[0].id(), "coffee");
    }

    #[test]
    fn preview_scroll_target_accounts_for_synthetic_title() {
        let service = OutlineService::new(ScrollMode::Preview);
        let outline = service.outline(POST);

        let target = service
            .scroll_target(&outline, "coffee", POST)
            .expect("coffee heading");
        let source = POST.find("### Coffee").expect("heading in source");
        assert_eq!(target.position, source + "# Weekend notes\n".len());
        assert_eq!(target.heading_id, "coffee");
    }

    #[test]
    fn scroll_target_ignores_title_heading() {
        let service = OutlineService::default();
        let outline = service.outline(POST);

        assert!(service.scroll_target(&outline, "weekend-notes", POST).is_none());
    }
}
