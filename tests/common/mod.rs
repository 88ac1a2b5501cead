//! Shared test fixtures, also used by the CLI tests.

#![allow(dead_code)]

use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per entry; each non-empty entry is drawn as a
/// single Helvetica text line.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    build_pdf(texts, None)
}

/// Like [`pdf_with_pages`], but the 0-based page `broken` has no `MediaBox`
/// anywhere in its page tree.
pub fn pdf_with_broken_page(texts: &[&str], broken: usize) -> Vec<u8> {
    build_pdf(texts, Some(broken))
}

fn build_pdf(texts: &[&str], broken: Option<usize>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        let content = if text.is_empty() {
            Vec::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text).into_bytes()
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));

        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        };
        if broken != Some(i) {
            page.set(
                "MediaBox",
                vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
            );
        }
        let page_id = doc.add_object(page);
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Lines consisting of exactly 80 `=` characters.
pub fn separator_lines(content: &str) -> usize {
    content
        .lines()
        .filter(|l| l.len() == 80 && l.chars().all(|c| c == '='))
        .count()
}

/// The numbers of all `PAGE k` banner lines, in order.
pub fn banner_numbers(content: &str) -> Vec<u32> {
    content
        .lines()
        .filter_map(|l| l.strip_prefix("PAGE "))
        .filter_map(|n| n.parse().ok())
        .collect()
}
