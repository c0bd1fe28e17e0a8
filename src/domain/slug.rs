//! Anchor ids for document headings.
//!
//! ASCII text goes through the `slug` crate; Chinese characters are
//! transliterated with `pinyin` first, so “基线对齐” becomes `ji-xian-dui-qi`.

use std::collections::HashMap;

use pinyin::{Pinyin, ToPinyin};
use slug::slugify;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive a base slug from the provided human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let transliterated = transliterate_to_ascii(input);
    let candidate = slugify(&transliterated);

    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Hands out anchors that are unique within one document.
///
/// Repeated bases receive monotonic suffixes (`setup`, `setup-2`, `setup-3`).
#[derive(Default, Debug)]
pub struct AnchorSlugger {
    occurrences: HashMap<String, usize>,
}

impl AnchorSlugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for the heading text, suffixed when already taken.
    pub fn anchor_for(&mut self, heading: &str) -> Result<String, SlugError> {
        let base = derive_slug(heading)?;
        Ok(self.claim(base))
    }

    /// Register an already-formed base and return its unique variant.
    ///
    /// Every issued anchor is recorded, so a suffixed anchor never collides
    /// with a later heading whose own slug happens to look the same.
    pub fn claim(&mut self, base: String) -> String {
        let Some(&last_suffix) = self.occurrences.get(&base) else {
            self.occurrences.insert(base.clone(), 1);
            return base;
        };

        let mut suffix = last_suffix;
        let candidate = loop {
            suffix += 1;
            let candidate = format!("{base}-{suffix}");
            if !self.occurrences.contains_key(&candidate) {
                break candidate;
            }
        };

        self.occurrences.insert(base, suffix);
        self.occurrences.insert(candidate.clone(), 1);
        candidate
    }
}

fn transliterate_to_ascii(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for ch in input.chars() {
        if ch.is_ascii() {
            output.push(ch);
            continue;
        }

        match ch.to_pinyin() {
            Some(py) => append_pinyin(&mut output, py),
            None if ch.is_whitespace() => output.push(' '),
            // slugify decides whether to keep or drop it
            None => output.push(ch),
        }
    }

    output
}

fn append_pinyin(buffer: &mut String, pinyin: Pinyin) {
    if !buffer.is_empty() && !buffer.ends_with(' ') {
        buffer.push(' ');
    }
    buffer.push_str(pinyin.plain());
}
