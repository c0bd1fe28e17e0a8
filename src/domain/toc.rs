use crate::domain::scroll::{ScrollHandler, ScrollMode, ScrollTarget, resolve_scroll_target};

/// Shallowest heading level that appears in a table of contents. Level 1 is the
/// document title.
pub const MIN_TOC_LEVEL: u8 = 2;
/// Deepest heading level that appears in a table of contents.
pub const MAX_TOC_LEVEL: u8 = 6;

/// A heading extracted from a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub id: String,
    pub text: String,
    pub level: u8,
    /// Byte offset of the heading in the source document.
    pub position: usize,
}

impl Heading {
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: u8, position: usize) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
            position,
        }
    }

    pub fn in_toc_range(&self) -> bool {
        (MIN_TOC_LEVEL..=MAX_TOC_LEVEL).contains(&self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocNode {
    pub heading: Heading,
    /// Nominal indentation, `level - 2`. Independent of how deep the node
    /// actually sits in the tree.
    pub depth: u8,
    pub children: Vec<TocNode>,
}

impl TocNode {
    fn open(heading: Heading) -> Self {
        let depth = heading.level - MIN_TOC_LEVEL;
        Self {
            heading,
            depth,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.heading.id
    }

    pub fn level(&self) -> u8 {
        self.heading.level
    }

    /// Pre-order walk over a forest.
    pub fn walk(forest: &[TocNode]) -> Walk<'_> {
        Walk {
            stack: forest.iter().rev().collect(),
        }
    }

    /// First node (in document order) whose heading carries `id`.
    pub fn find<'a>(forest: &'a [TocNode], id: &str) -> Option<&'a TocNode> {
        Self::walk(forest).find(|node| node.id() == id)
    }

    pub fn count(forest: &[TocNode]) -> usize {
        Self::walk(forest).count()
    }
}

/// Iterator returned by [`TocNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a TocNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TocNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Builds table-of-contents trees from flat heading lists.
///
/// The builder is stateless apart from its scroll mode; every call to
/// [`TocBuilder::build`] derives a fresh tree from its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocBuilder {
    scroll_mode: ScrollMode,
}

impl TocBuilder {
    pub fn new(scroll_mode: ScrollMode) -> Self {
        Self { scroll_mode }
    }

    pub fn preview() -> Self {
        Self::new(ScrollMode::Preview)
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll_mode
    }

    pub fn build(&self, headings: &[Heading]) -> Vec<TocNode> {
        build_toc(headings)
    }

    /// Scroll target for a node rendered against `document`.
    pub fn scroll_target(&self, node: &TocNode, document: &str) -> ScrollTarget {
        ScrollTarget {
            position: resolve_scroll_target(
                node.heading.position,
                self.scroll_mode.is_preview(),
                document,
            ),
            heading_id: node.heading.id.clone(),
        }
    }

    /// Dispatch a click on `node` to `handler`.
    pub fn activate<H>(&self, node: &TocNode, document: &str, handler: &mut H)
    where
        H: ScrollHandler + ?Sized,
    {
        let target = self.scroll_target(node, document);
        handler.scroll_to(target.position, &target.heading_id);
    }
}

/// Nest headings of levels 2 through 6 into a forest.
///
/// A heading closes every open node at its own level or deeper, then opens a
/// node of its own under whatever remains open. When nothing remains open the
/// heading becomes a root. Headings outside the 2..=6 range are skipped.
pub fn build_toc(headings: &[Heading]) -> Vec<TocNode> {
    let mut roots = Vec::new();
    let mut open: Vec<TocNode> = Vec::new();

    for heading in headings.iter().filter(|heading| heading.in_toc_range()) {
        while open
            .last()
            .is_some_and(|node| node.level() >= heading.level)
        {
            close_top(&mut open, &mut roots);
        }
        open.push(TocNode::open(heading.clone()));
    }

    while !open.is_empty() {
        close_top(&mut open, &mut roots);
    }

    roots
}

fn close_top(open: &mut Vec<TocNode>, roots: &mut Vec<TocNode>) {
    let Some(node) = open.pop() else {
        return;
    };
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
