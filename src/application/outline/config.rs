use comrak::options::Options;

/// Markdown options matching what the blog editor renders.
pub(crate) fn default_options() -> Options<'static> {
    let mut options = Options::default();
    configure_extensions(&mut options);
    options
}

fn configure_extensions(options: &mut Options<'static>) {
    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;
    ext.superscript = true;
    ext.footnotes = true;
    ext.description_lists = true;
    ext.front_matter_delimiter = Some("---".to_string());
    ext.multiline_block_quotes = true;
    ext.alerts = true;
    ext.math_dollars = true;
    ext.math_code = true;
    ext.underline = true;
    ext.subscript = true;
    ext.cjk_friendly_emphasis = true;
}
