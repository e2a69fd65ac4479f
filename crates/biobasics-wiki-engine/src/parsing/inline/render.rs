use regex::Captures;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, ExternalLink, Strong, WikiLink},
};

/// What each recognised construct is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    /// The construct's HTML element.
    Html,
    /// Only the human-readable part (term, link text, inner text).
    Plain,
}

/// Renders one line of inline markup to HTML.
///
/// Text outside recognised constructs is passed through unescaped.
pub fn render_inline(text: &str) -> String {
    run_passes(text, Output::Html)
}

/// Strips inline markup from one line, keeping only its readable text.
///
/// Runs the same passes as [`render_inline`] and then drops HTML tags, so the
/// result equals the rendered line with its tags stripped.
pub fn plain_text(text: &str) -> String {
    run_passes(text, Output::Plain)
}

fn run_passes(text: &str, out: Output) -> String {
    let text = WikiLink::pattern().replace_all(text, |caps: &Captures<'_>| match out {
        Output::Html => WikiLink::to_html(&caps[1]),
        Output::Plain => caps[1].to_string(),
    });
    let text = ExternalLink::pattern().replace_all(&text, |caps: &Captures<'_>| match out {
        Output::Html => ExternalLink::to_html(&caps[1], &caps[2]),
        Output::Plain => caps[1].to_string(),
    });
    let text = strong_pass(&text, out);
    let text = emphasis_pass(&text, out);
    match out {
        Output::Html => text,
        Output::Plain => strip_tags(&text),
    }
}

fn strip_tags(text: &str) -> String {
    let mut cur = Cursor::new(text);
    let mut buf = String::with_capacity(text.len());
    while !cur.eof() {
        match cur.tag_len() {
            Some(len) => cur.bump_n(len),
            None => buf.push_str(cur.bump_char()),
        }
    }
    buf
}

fn strong_pass(text: &str, out: Output) -> String {
    scan(text, out, try_parse_strong, Strong::OPEN_TAG, Strong::CLOSE_TAG)
}

fn emphasis_pass(text: &str, out: Output) -> String {
    scan(
        text,
        out,
        try_parse_emphasis,
        Emphasis::OPEN_TAG,
        Emphasis::CLOSE_TAG,
    )
}

/// Walks `text` once, copying tags verbatim and wrapping every span that
/// `try_parse` recognises. Matches are leftmost and non-overlapping.
fn scan(
    text: &str,
    out: Output,
    try_parse: fn(&Cursor<'_>) -> Option<(usize, usize, usize)>,
    open_tag: &str,
    close_tag: &str,
) -> String {
    let mut cur = Cursor::new(text);
    let mut buf = String::with_capacity(text.len() + 16);

    while !cur.eof() {
        if let Some(len) = cur.tag_len() {
            buf.push_str(&text[cur.pos()..cur.pos() + len]);
            cur.bump_n(len);
            continue;
        }
        if let Some((inner_start, inner_end, end)) = try_parse(&cur) {
            let inner = &text[inner_start..inner_end];
            match out {
                Output::Html => {
                    buf.push_str(open_tag);
                    buf.push_str(inner);
                    buf.push_str(close_tag);
                }
                Output::Plain => buf.push_str(inner),
            }
            cur.bump_n(end - cur.pos());
            continue;
        }
        buf.push_str(cur.bump_char());
    }

    buf
}

/// Attempts `**inner**` at the cursor; inner text is at least one byte and
/// contains no star outside of tags.
///
/// Returns `(inner_start, inner_end, end)` byte positions.
fn try_parse_strong(cur: &Cursor<'_>) -> Option<(usize, usize, usize)> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }
    let inner_start = cur.pos() + Strong::DELIM.len();
    let close = cur.find_outside_tags(inner_start, Emphasis::DELIM)?;
    if close == inner_start || !cur.s.as_bytes()[close..].starts_with(Strong::DELIM) {
        return None;
    }
    Some((inner_start, close, close + Strong::DELIM.len()))
}

/// Attempts `*inner*` at the cursor where neither star is adjacent to
/// another star.
fn try_parse_emphasis(cur: &Cursor<'_>) -> Option<(usize, usize, usize)> {
    if cur.peek() != Some(Emphasis::DELIM)
        || cur.prev() == Some(Emphasis::DELIM)
        || cur.peek_at(1) == Some(Emphasis::DELIM)
    {
        return None;
    }
    let inner_start = cur.pos() + 1;
    let close = cur.find_outside_tags(inner_start, Emphasis::DELIM)?;
    if close == inner_start || cur.s.as_bytes().get(close + 1) == Some(&Emphasis::DELIM) {
        return None;
    }
    Some((inner_start, close, close + 1))
}
