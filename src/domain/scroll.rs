/// How heading positions map onto the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// Positions address the source document as-is.
    #[default]
    Direct,
    /// The preview prepends a `# {first line}` title, shifting every position.
    Preview,
}

impl ScrollMode {
    pub fn from_preview_flag(preview: bool) -> Self {
        if preview { Self::Preview } else { Self::Direct }
    }

    pub fn is_preview(self) -> bool {
        matches!(self, Self::Preview)
    }
}

/// Resolved destination for a click on a table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTarget {
    pub position: usize,
    pub heading_id: String,
}

/// Receives scroll requests from the table of contents.
pub trait ScrollHandler {
    fn scroll_to(&mut self, position: usize, heading_id: &str);
}

impl<F> ScrollHandler for F
where
    F: FnMut(usize, &str),
{
    fn scroll_to(&mut self, position: usize, heading_id: &str) {
        self(position, heading_id)
    }
}

/// Map a heading position onto the rendered document.
///
/// In preview mode the renderer prepends `"# " + first_line + "\n"`, so the
/// returned offset is shifted by that line's byte length.
pub fn resolve_scroll_target(position: usize, is_preview_mode: bool, document_text: &str) -> usize {
    if !is_preview_mode {
        return position;
    }

    position.saturating_add(synthetic_title_len(document_text))
}

fn synthetic_title_len(document_text: &str) -> usize {
    let first_line = document_text.split('\n').next().unwrap_or_default();
    "# ".len() + first_line.len() + "\n".len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_mode_returns_position_unchanged() {
        assert_eq!(resolve_scroll_target(100, false, "Title line\nBody..."), 100);
        assert_eq!(resolve_scroll_target(0, false, ""), 0);
    }

    #[test]
    fn preview_mode_adds_synthetic_title_length() {
        let resolved = resolve_scroll_target(100, true, "Title line\nBody...");
        assert_eq!(resolved, 100 + "# Title line\n".len());
    }

    #[test]
    fn preview_mode_uses_whole_text_without_newline() {
        assert_eq!(resolve_scroll_target(4, true, "Only"), 4 + "# Only\n".len());
    }

    #[test]
    fn preview_mode_on_empty_document_counts_prefix() {
        assert_eq!(resolve_scroll_target(0, true, ""), 3);
    }

    #[test]
    fn preview_mode_measures_bytes() {
        let document = "基线对齐\n正文";
        assert_eq!(
            resolve_scroll_target(10, true, document),
            10 + "# 基线对齐\n".len()
        );
    }

    #[test]
    fn preview_offset_saturates_at_the_end_of_the_address_space() {
        assert_eq!(resolve_scroll_target(usize::MAX, true, "Title"), usize::MAX);
        assert_eq!(resolve_scroll_target(usize::MAX - 1, true, ""), usize::MAX);
    }

    #[test]
    fn mode_follows_preview_flag() {
        assert_eq!(ScrollMode::from_preview_flag(true), ScrollMode::Preview);
        assert_eq!(ScrollMode::from_preview_flag(false), ScrollMode::Direct);
        assert!(!ScrollMode::default().is_preview());
    }
}
