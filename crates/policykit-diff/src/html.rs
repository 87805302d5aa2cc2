//! Standalone HTML rendering of a redline over its base document.

use crate::position::PositionIndex;
use crate::token::{render_tokens, split_change_text};
use policykit_types::{RedlineChange, RedlineKind};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

struct Splice {
    start: usize,
    end: usize,
    html: String,
}

/// Render `base` with tracked changes marked up as `<del>` / `<ins>`.
///
/// Escaping never introduces whitespace, so positions resolve against the escaped text
/// exactly as they do against the raw base.
pub fn render_redline_html(base: &str, changes: &[RedlineChange], title: Option<&str>) -> String {
    let escaped = escape_html(base);
    let index = PositionIndex::build(&escaped);
    let end_of_text = escaped.len();

    let mut splices: Vec<Splice> = Vec::new();
    for change in changes {
        let attrs = attributes(change);
        let at = index.token_index(&change.position);
        match change.kind {
            RedlineKind::Delete => {
                let count = split_change_text(&change.text).len();
                let covered = at.and_then(|first| {
                    let last = (first + count).min(index.len()).checked_sub(1)?;
                    let (start, _) = index.span(first)?;
                    let (_, end) = index.span(last)?;
                    (last >= first).then_some((start, end))
                });
                match covered {
                    Some((start, end)) => splices.push(Splice {
                        start,
                        end,
                        html: format!(
                            "<del class=\"redline-delete\"{attrs}>{}</del>",
                            &escaped[start..end]
                        ),
                    }),
                    None => splices.push(Splice {
                        start: end_of_text,
                        end: end_of_text,
                        html: format!(" <del class=\"redline-delete\"{attrs}>{}</del>", display(change)),
                    }),
                }
            }
            RedlineKind::Insert => {
                let offset = at.and_then(|i| index.span(i).map(|(start, _)| start));
                let html = format!("<ins class=\"redline-insert\"{attrs}>{}</ins>", display(change));
                match offset {
                    Some(start) => splices.push(Splice {
                        start,
                        end: start,
                        html: format!("{html} "),
                    }),
                    None => splices.push(Splice {
                        start: end_of_text,
                        end: end_of_text,
                        html: format!(" {html}"),
                    }),
                }
            }
            RedlineKind::Format => {}
        }
    }

    // Reverse offset order keeps earlier offsets valid. At equal offsets the later change
    // is spliced first so the original order reads left to right.
    let mut body = escaped;
    let mut order: Vec<usize> = (0..splices.len()).collect();
    order.sort_by(|&a, &b| splices[b].start.cmp(&splices[a].start).then(b.cmp(&a)));
    for i in order {
        let s = &splices[i];
        body.replace_range(s.start..s.end, &s.html);
    }

    page(title, &body)
}

fn display(change: &RedlineChange) -> String {
    escape_html(&render_tokens(&split_change_text(&change.text)))
}

fn attributes(change: &RedlineChange) -> String {
    let mut attrs = format!(
        " data-author=\"{}\" data-change-id=\"{}\"",
        escape_html(&change.author),
        escape_html(&change.id)
    );
    if let Some(comment) = &change.comment {
        attrs.push_str(&format!(" title=\"{}\"", escape_html(comment)));
    }
    attrs
}

fn page(title: Option<&str>, body: &str) -> String {
    let head_title = title.map(escape_html).unwrap_or_else(|| "Redline".to_string());
    let heading = title
        .map(|t| format!("<h1>{}</h1>\n", escape_html(t)))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{head_title}</title>\n\
         <style>\n\
         .redline {{ white-space: pre-wrap; font-family: serif; line-height: 1.5; }}\n\
         .redline-delete {{ color: #b00020; text-decoration: line-through; }}\n\
         .redline-insert {{ color: #006400; text-decoration: underline; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {heading}<div class=\"redline\">{body}</div>\n\
         </body>\n\
         </html>\n"
    )
}
