use similar::utils::diff_words;
use similar::{Algorithm, ChangeTag};

/// Word-granularity diff of a replace pair, rendered inline. Deletions are
/// wrapped in `<del>`, insertions in `<ins>`, with adjacent same-tag tokens
/// merged into one span. Text inside a span is entity-escaped so it cannot
/// collide with the markers or with inline HTML in the document; unchanged
/// text is emitted untouched.
pub fn diff_words_inline(old: &str, new: &str) -> String {
    let changes = diff_words(Algorithm::Myers, old, new);
    let mut out = String::with_capacity(old.len() + new.len());
    let mut open: Option<ChangeTag> = None;

    for (tag, value) in changes {
        match tag {
            ChangeTag::Equal => {
                close_span(&mut out, &mut open);
                out.push_str(value);
            }
            ChangeTag::Delete | ChangeTag::Insert => {
                if open != Some(tag) {
                    close_span(&mut out, &mut open);
                    out.push_str(open_marker(tag));
                    open = Some(tag);
                }
                push_escaped(&mut out, value);
            }
        }
    }
    close_span(&mut out, &mut open);
    out
}

fn open_marker(tag: ChangeTag) -> &'static str {
    match tag {
        ChangeTag::Delete => "<del>",
        _ => "<ins>",
    }
}

fn close_span(out: &mut String, open: &mut Option<ChangeTag>) {
    if let Some(tag) = open.take() {
        out.push_str(match tag {
            ChangeTag::Delete => "</del>",
            _ => "</ins>",
        });
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
