use std::fmt::{self, Display, Formatter};

use html_escape::encode_double_quoted_attribute;

use crate::parsing::blocks::{Block, Header, Image, Table, kinds::Heading};

/// HTML for a single block.
pub struct BlockHtml<'a>(pub &'a Block);

impl Display for BlockHtml<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Block::Header(header) => write_header(f, header),
            Block::Image(image) => write_image(f, image),
            Block::List(items) => {
                f.write_str("<ul class=\"bullet-list\">")?;
                for item in items {
                    write!(f, "\n<li>{item}</li>")?;
                }
                f.write_str("\n</ul>")
            }
            Block::Table(table) => write_table(f, table),
            Block::Rule => f.write_str("<hr class=\"section-divider\">"),
            Block::Paragraph(text) => write!(f, "<p>{text}</p>"),
            Block::Literal(raw) => f.write_str(raw),
        }
    }
}

fn write_header(f: &mut Formatter<'_>, header: &Header) -> fmt::Result {
    write!(f, "<h{} id=\"{}\"", header.level, header.anchor)?;
    if header.is_sources {
        write!(f, " class=\"{}\"", Heading::SOURCES_CLASS)?;
    }
    write!(f, ">{}</h{}>", header.text, header.level)
}

fn write_image(f: &mut Formatter<'_>, image: &Image) -> fmt::Result {
    write!(
        f,
        "<div class=\"image-container image-{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\" /></div>",
        image.position.as_str(),
        encode_double_quoted_attribute(&image.url),
        encode_double_quoted_attribute(&image.alt),
    )?;
    if let Some(caption) = &image.caption {
        write!(f, "\n<p class=\"image-description\">{caption}</p>")?;
    }
    Ok(())
}

fn write_table(f: &mut Formatter<'_>, table: &Table) -> fmt::Result {
    f.write_str("<div class=\"table-wrapper\"><table class=\"wiki-table\">\n<thead><tr>")?;
    for cell in &table.header {
        write!(f, "<th>{cell}</th>")?;
    }
    f.write_str("</tr></thead>\n<tbody>")?;
    for row in &table.rows {
        f.write_str("\n<tr>")?;
        for cell in row {
            write!(f, "<td>{cell}</td>")?;
        }
        f.write_str("</tr>")?;
    }
    f.write_str("\n</tbody></table></div>")
}

/// Renders body blocks in order, one per line.
pub fn render_body(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| {
            log::trace!("rendering {block:?}");
            BlockHtml(block).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::ImagePosition;
    use pretty_assertions::assert_eq;

    fn html(block: Block) -> String {
        BlockHtml(&block).to_string()
    }

    #[test]
    fn header_carries_anchor_id() {
        let block = Block::Header(Header {
            level: 1,
            text: "Heart Attacks".into(),
            anchor: "heart-attacks".into(),
            is_sources: false,
        });
        assert_eq!(html(block), r#"<h1 id="heart-attacks">Heart Attacks</h1>"#);
    }

    #[test]
    fn sources_header_gets_class() {
        let block = Block::Header(Header {
            level: 2,
            text: "Sources".into(),
            anchor: "sources".into(),
            is_sources: true,
        });
        assert_eq!(
            html(block),
            r#"<h2 id="sources" class="sources-header">Sources</h2>"#
        );
    }

    #[test]
    fn image_with_caption() {
        let block = Block::Image(Image {
            position: ImagePosition::Left,
            url: "heart.png".into(),
            alt: "A heart".into(),
            caption: Some("Left ventricle".into()),
        });
        insta::assert_snapshot!(html(block), @r#"
        <div class="image-container image-left"><img src="heart.png" alt="A heart" loading="lazy" /></div>
        <p class="image-description">Left ventricle</p>
        "#);
    }

    #[test]
    fn image_attributes_are_escaped() {
        let block = Block::Image(Image {
            position: ImagePosition::Center,
            url: "a.png?x=1&y=\"2\"".into(),
            alt: "<b>".into(),
            caption: None,
        });
        assert_eq!(
            html(block),
            "<div class=\"image-container image-center\"><img src=\"a.png?x=1&amp;y=&quot;2&quot;\" alt=\"&lt;b&gt;\" loading=\"lazy\" /></div>"
        );
    }

    #[test]
    fn list_items_one_per_line() {
        let block = Block::List(vec!["<strong>Bold</strong> item".into(), "two".into()]);
        insta::assert_snapshot!(html(block), @r#"
        <ul class="bullet-list">
        <li><strong>Bold</strong> item</li>
        <li>two</li>
        </ul>
        "#);
    }

    #[test]
    fn table_with_header_and_rows() {
        let block = Block::Table(Table {
            header: vec!["A".into(), "B".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        });
        insta::assert_snapshot!(html(block), @r#"
        <div class="table-wrapper"><table class="wiki-table">
        <thead><tr><th>A</th><th>B</th></tr></thead>
        <tbody>
        <tr><td>1</td><td>2</td></tr>
        </tbody></table></div>
        "#);
    }

    #[test]
    fn ragged_rows_are_not_padded() {
        let block = Block::Table(Table {
            header: vec!["A".into(), "B".into()],
            rows: vec![vec!["only".into()]],
        });
        assert!(html(block).contains("<tr><td>only</td></tr>"));
    }

    #[test]
    fn simple_blocks() {
        assert_eq!(html(Block::Rule), r#"<hr class="section-divider">"#);
        assert_eq!(html(Block::Paragraph("hi".into())), "<p>hi</p>");
        assert_eq!(html(Block::Literal("#nospace".into())), "#nospace");
    }

    #[test]
    fn body_joins_blocks_with_newlines() {
        let body = render_body(&[Block::Rule, Block::Paragraph("x".into())]);
        assert_eq!(body, "<hr class=\"section-divider\">\n<p>x</p>");
        assert_eq!(render_body(&[]), "");
    }
}
