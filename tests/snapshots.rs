//! Snapshot tests for mdframe output.
//!
//! These tests capture the rendered tree outline and the document JSON and
//! compare them against inline snapshots. Run with `cargo insta review` to
//! update them.

use mdframe_core::FontName;
use mdframe_parser::parse;
use mdframe_render::{render, MemoryHost};

/// Helper to render markdown to a tree outline.
fn outline(input: &str) -> String {
    let root = render(&parse(input), &mut MemoryHost::new()).unwrap();
    root.outline().trim_end().to_string()
}

// =============================================================================
// Tree Snapshots
// =============================================================================

#[test]
fn test_snapshot_sample_document() {
    let input = "# Sample Title\n\n\
                 A paragraph with **bold**, *italic*, \n\
                 [link](https://example.com) and `code`.\n\n\
                 ---\n\n\
                 > Blockquote here.\n\n\
                 ## List\n\
                 - First item\n\
                 - Second item\n\n\
                 ## Table\n\
                 | Name | Value |\n\
                 | --- | --- |\n\
                 | A | 1 |\n\
                 | B | 2 |\n";
    insta::assert_snapshot!(outline(input), @r###"
    frame "Sample Title" vertical spacing=8 padding=24 fills=1
      text "Sample Title" Roboto Bold 20
      text "A paragraph with bold, italic,  link and code." Roboto Regular 12
        range 17..21 font="Roboto Bold"
        range 23..29 font="Roboto Italic"
        range 32..36 font="Roboto Regular" fill=#004BFA link=https://example.com
        range 41..45 font="Roboto Mono Regular"
      rectangle 600x1
      frame "Blockquote" vertical spacing=4 padding=8 stroke=left
        text "Blockquote here." Roboto Italic 12
      text "List" Roboto Bold 18
      frame "List" vertical spacing=4 padding=0
        frame "List Item" horizontal spacing=8 padding=0
          text "•" Roboto Regular 12
          text "First item" Roboto Regular 12
        frame "List Item" horizontal spacing=8 padding=0
          text "•" Roboto Regular 12
          text "Second item" Roboto Regular 12
      text "Table" Roboto Bold 18
      frame "Table" vertical spacing=0 padding=0 fills=1 stroke
        frame "Row" horizontal spacing=0 padding=0
          frame "Cell" vertical spacing=0 padding=12 width=300 fills=1 stroke
            text "Name" Roboto Medium 12
          frame "Cell" vertical spacing=0 padding=12 width=300 fills=1 stroke
            text "Value" Roboto Medium 12
        frame "Row" horizontal spacing=0 padding=0
          frame "Cell" vertical spacing=0 padding=12 width=300 stroke
            text "A" Roboto Regular 12
          frame "Cell" vertical spacing=0 padding=12 width=300 stroke
            text "1" Roboto Regular 12
        frame "Row" horizontal spacing=0 padding=0
          frame "Cell" vertical spacing=0 padding=12 width=300 stroke
            text "B" Roboto Regular 12
          frame "Cell" vertical spacing=0 padding=12 width=300 stroke
            text "2" Roboto Regular 12
    "###);
}

#[test]
fn test_snapshot_heading_all_levels() {
    let input = "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6";
    insta::assert_snapshot!(outline(input), @r###"
    frame "H1" vertical spacing=8 padding=24 fills=1
      text "H1" Roboto Bold 20
      text "H2" Roboto Bold 18
      text "H3" Roboto Bold 16
      text "H4" Roboto Bold 14
      text "H5" Roboto Bold 12
      text "H6" Roboto Bold 10
    "###);
}

#[test]
fn test_snapshot_code_block() {
    insta::assert_snapshot!(outline("```rust\nfn main() {}\n```"), @r###"
    frame "Markdown" vertical spacing=8 padding=24 fills=1
      frame "Code" vertical spacing=4 padding=16 fills=1 stroke radius=6
        text "fn main() {}" Roboto Mono Regular 12
          range 0..12 font="Roboto Mono Regular"
    "###);
}

#[test]
fn test_snapshot_ordered_list() {
    insta::assert_snapshot!(outline("1. first\n7. *second*"), @r###"
    frame "Markdown" vertical spacing=8 padding=24 fills=1
      frame "List" vertical spacing=4 padding=0
        frame "List Item" horizontal spacing=8 padding=0
          text "1." Roboto Regular 12
          text "first" Roboto Regular 12
        frame "List Item" horizontal spacing=8 padding=0
          text "2." Roboto Regular 12
          text "second" Roboto Regular 12
            range 0..6 font="Roboto Italic"
    "###);
}

#[test]
fn test_snapshot_missing_fonts() {
    let mut host = MemoryHost::with_fonts([FontName::new("Inter", "Regular")]);
    let root = render(&parse("# Title\n\nsome **bold** text"), &mut host).unwrap();
    insta::assert_snapshot!(root.outline().trim_end(), @r###"
    frame "Title" vertical spacing=8 padding=24 fills=1
      text "Title" Inter Regular 20
      text "some bold text" Inter Regular 12
    "###);
}

// =============================================================================
// Document Snapshots
// =============================================================================

#[test]
fn test_snapshot_document_json() {
    let doc = parse("# Notes\n\n- **one**\n- two");
    insta::assert_json_snapshot!(doc, @r###"
    {
      "title": "Notes",
      "blocks": [
        {
          "type": "heading",
          "level": 1,
          "text": "Notes",
          "spans": []
        },
        {
          "type": "list",
          "ordered": false,
          "items": [
            {
              "text": "one",
              "spans": [
                {
                  "start": 0,
                  "end": 3,
                  "style": {
                    "font_style": "Bold"
                  }
                }
              ]
            },
            {
              "text": "two",
              "spans": []
            }
          ]
        }
      ]
    }
    "###);
}

#[test]
fn test_snapshot_document_json_redacted_spans() {
    let doc = parse("# Notes\n\nSome *text*.");
    insta::assert_json_snapshot!(doc, {
        ".blocks[].spans" => "[spans]"
    }, @r###"
    {
      "title": "Notes",
      "blocks": [
        {
          "type": "heading",
          "level": 1,
          "text": "Notes",
          "spans": "[spans]"
        },
        {
          "type": "paragraph",
          "text": "Some text.",
          "spans": "[spans]"
        }
      ]
    }
    "###);
}
