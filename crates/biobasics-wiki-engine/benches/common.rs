// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let mut content = String::from("# Benchmark Article\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "Paragraph about the **heart** and *lungs* with a [[Wiki Term]] and [a link](https://example.com/a*b).\n\n",
        );
        content.push_str(&format!("![left|Diagram {section}](diagram-{section}.png)\n"));
        content.push_str("*Figure: a **labelled** diagram*\n\n");
        content.push_str(&format!("### Details {section}\n\n"));
        for i in 0..3 {
            content.push_str(&format!("- Item {i} with **bold** text\n"));
        }
        content.push_str("\n| Marker | Value |\n|---|---|\n| Troponin | *high* |\n| CK-MB | normal |\n\n---\n\n");
    }

    content.push_str("## Sources\n\n- [Journal](https://example.com/journal)\n");
    content
}
