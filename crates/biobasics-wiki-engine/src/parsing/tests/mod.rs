//! Integration tests for the parsing module.
//!
//! Fixture articles live in `fixtures/`; each parsed fixture is checked
//! against the outline/header invariants and summarised into an inline
//! snapshot.

mod summary;

use pretty_assertions::assert_eq;

use crate::parsing::{blocks::Block, parse_document};

fn parse_fixture(name: &str) -> crate::parsing::ParsedDoc {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(path).unwrap();
    let doc = parse_document(&md);
    invariants::check(&doc);
    doc
}

#[test]
fn fixture_heart_attacks() {
    let doc = parse_fixture("heart_attacks");
    insta::assert_snapshot!(summary::summarize(&doc), @r##"
    title: Heart Attacks
    toc2: Symptoms -> #symptoms
    toc3: Silent heart attacks -> #silent-heart-attacks
    toc2: Risk Factors -> #risk-factors
    h1#heart-attacks: Heart Attacks
    p: A <strong>heart attack</strong> happens when blood flow to the <a href="#Heart" class="wiki-link">Heart</a> is blocked.
    image(right) img/coronary.png alt=Coronary arteries caption=The coronary arteries supply the heart muscle
    h2#symptoms: Symptoms
    list: <strong>Chest pain</strong> or pressure | Shortness of breath | Pain spreading to the <em>left arm</em>
    h3#silent-heart-attacks: Silent heart attacks
    p: Some attacks cause few symptoms.
    h2#risk-factors: Risk Factors
    table[Factor | Modifiable]: 2 rows
    rule
    h2#sources [sources]: Sources
    list: <a href="https://www.bhf.org.uk" class="external-link" target="_blank" rel="noopener">BHF</a>
    "##);
}

/// TOC anchors resolve for headings whose text needs normalising.
#[test]
fn anchors_stay_in_sync_for_awkward_headings() {
    let md = "\
# **Bold** Title
## [[Aorta]] and *valves*
## ...Leading dots
### Trailing marks!?
## Crohn's & Colitis
### [NICE](https://nice.org.uk) guidance
## BP <120 and >80 levels
### <b>Raw</b> *markup*
## Overview
## Overview
###### Deep heading";
    let doc = parse_document(md);
    invariants::check(&doc);

    let anchors: Vec<&str> = doc.outline.toc.iter().map(|e| e.anchor.as_str()).collect();
    assert_eq!(
        anchors,
        vec![
            "aorta-and-valves",
            "leading-dots",
            "trailing-marks",
            "crohns-colitis",
            "nice-guidance",
            "bp-120-and-80-levels",
            "raw-markup",
            "overview",
            "overview",
        ]
    );
}

#[test]
fn text_without_block_syntax_is_one_paragraph() {
    let doc = parse_document("Just **some** text with [[Links]].");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph(
            r##"Just <strong>some</strong> text with <a href="#Links" class="wiki-link">Links</a>."##
                .into()
        )]
    );
}

#[test]
fn empty_document() {
    let doc = parse_document("");
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.outline.title, None);
    assert!(doc.outline.toc.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n   \n");
    assert!(doc.blocks.is_empty());
}

#[test]
fn open_list_does_not_leak_into_next_document() {
    let first = parse_document("- dangling item");
    assert!(matches!(first.blocks.as_slice(), [Block::List(_)]));

    let second = parse_document("plain");
    assert_eq!(second.blocks, vec![Block::Paragraph("plain".into())]);
}

#[test]
fn open_table_does_not_leak_into_next_document() {
    let first = parse_document("| A | B |\n|---|---|");
    assert!(matches!(first.blocks.as_slice(), [Block::Table(t)] if t.rows.is_empty()));

    // Starts a new table whose header is this row, not a body row of the
    // previous document's table.
    let second = parse_document("| 1 | 2 |");
    match second.blocks.as_slice() {
        [Block::Table(t)] => {
            assert_eq!(t.header, vec!["1".to_string(), "2".to_string()]);
            assert!(t.rows.is_empty());
        }
        other => panic!("expected a single table, got {other:?}"),
    }
}
