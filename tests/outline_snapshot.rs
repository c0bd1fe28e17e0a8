use tocwright::application::outline::OutlineService;
use tocwright::domain::{
    scroll::ScrollMode,
    toc::{Heading, TocNode},
};
use tocwright::presentation::toc::render_text;

fn load_markdown() -> &'static str {
    include_str!("fixtures/post.md")
}

#[test]
fn direct_outline_snapshot_matches() {
    let markdown = load_markdown();
    let service = OutlineService::new(ScrollMode::Direct);
    let outline = service.outline(markdown);

    let text = render_text(&outline.toc, &service.builder(), markdown).expect("render text");
    insta::assert_snapshot!("direct_outline", text);
}

#[test]
fn preview_outline_snapshot_matches() {
    let markdown = load_markdown();
    let service = OutlineService::new(ScrollMode::Preview);
    let outline = service.outline(markdown);

    let text = render_text(&outline.toc, &service.builder(), markdown).expect("render text");
    insta::assert_snapshot!("preview_outline", text);
}

#[test]
fn outline_preserves_every_section_heading_in_order() {
    let markdown = load_markdown();
    let outline = OutlineService::default().outline(markdown);

    let walked: Vec<&Heading> = TocNode::walk(&outline.toc).map(|node| &node.heading).collect();
    let expected: Vec<&Heading> = outline
        .headings
        .iter()
        .filter(|heading| heading.level >= 2 && heading.level <= 6)
        .collect();

    assert_eq!(walked, expected);
    assert_eq!(outline.headings[0].level, 1);
    assert!(
        outline
            .headings
            .windows(2)
            .all(|pair| pair[0].position <= pair[1].position),
        "positions follow document order"
    );
}

#[test]
fn heading_positions_point_at_heading_markers() {
    let markdown = load_markdown();
    let outline = OutlineService::default().outline(markdown);

    for heading in &outline.headings {
        assert!(
            markdown[heading.position..].starts_with('#'),
            "heading `{}` should start at a marker",
            heading.id
        );
    }
}

#[test]
fn repeated_outlines_are_identical() {
    let markdown = load_markdown();
    let service = OutlineService::new(ScrollMode::Preview);

    assert_eq!(service.outline(markdown), service.outline(markdown));
}
