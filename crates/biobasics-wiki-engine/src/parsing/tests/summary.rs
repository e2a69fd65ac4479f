use crate::parsing::{ParsedDoc, blocks::Block};

/// One line per block, for compact inline snapshots.
pub fn summarize(doc: &ParsedDoc) -> String {
    let mut lines = vec![format!(
        "title: {}",
        doc.outline.title.as_deref().unwrap_or("-")
    )];
    lines.extend(
        doc.outline
            .toc
            .iter()
            .map(|e| format!("toc{}: {} -> #{}", e.level, e.text, e.anchor)),
    );
    lines.extend(doc.blocks.iter().map(summarize_block));
    lines.join("\n")
}

fn summarize_block(block: &Block) -> String {
    match block {
        Block::Header(h) => format!(
            "h{}#{}{}: {}",
            h.level,
            h.anchor,
            if h.is_sources { " [sources]" } else { "" },
            h.text
        ),
        Block::Image(img) => format!(
            "image({}) {} alt={} caption={}",
            img.position.as_str(),
            img.url,
            img.alt,
            img.caption.as_deref().unwrap_or("-")
        ),
        Block::List(items) => format!("list: {}", items.join(" | ")),
        Block::Table(t) => format!("table[{}]: {} rows", t.header.join(" | "), t.rows.len()),
        Block::Rule => "rule".to_string(),
        Block::Paragraph(text) => format!("p: {text}"),
        Block::Literal(text) => format!("literal: {text}"),
    }
}
