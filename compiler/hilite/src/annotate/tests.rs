use pretty_assertions::assert_eq;

use super::*;

fn span(start: usize, end: usize, class: &str) -> Annotation {
    Annotation {
        start,
        end,
        open: format!("<span class=\"{class}\">").into_bytes(),
        close: b"</span>".to_vec(),
    }
}

#[test]
fn short_assignment() {
    let got = annotate(b"a:=2", &HtmlAnnotator::default());
    assert_eq!(
        got,
        vec![
            span(0, 1, "pln"),
            span(1, 2, "pun"),
            span(2, 3, "pun"),
            span(3, 4, "dec"),
        ]
    );
}

#[test]
fn unmapped_tokens_leave_gaps() {
    let got = annotate(b"if  x", &HtmlAnnotator::default());
    assert_eq!(got, vec![span(0, 2, "kwd"), span(4, 5, "pln")]);
}

#[test]
fn offsets_are_bytes_not_chars() {
    // "é" is two bytes, "→" is three.
    let src = "\u{e9} \u{2192} x".as_bytes();
    let got = annotate(src, &HtmlAnnotator::default());
    assert_eq!(
        got,
        vec![span(0, 2, "pln"), span(3, 6, "pun"), span(7, 8, "pln")]
    );
    assert_eq!(&src[got[2].start..got[2].end], b"x");
}

#[test]
fn source_is_not_escaped() {
    let got = annotate(b"\"<\"", &HtmlAnnotator::default());
    assert_eq!(got, vec![span(0, 3, "str")]);
}

#[test]
fn empty_map_produces_nothing() {
    let got = annotate(b"let x = 1", &HtmlAnnotator::new(ClassMap::empty()));
    assert!(got.is_empty());
}

#[test]
fn empty_input_produces_nothing() {
    assert!(annotate(b"", &HtmlAnnotator::default()).is_empty());
}

#[test]
fn multiline_comment_is_one_annotation() {
    let got = annotate(b"/* a\nb */\nx", &HtmlAnnotator::default());
    assert_eq!(got, vec![span(0, 9, "com"), span(10, 11, "pln")]);
}

/// Annotator that only marks keywords, with custom markup.
struct KeywordsOnly;

impl Annotator for KeywordsOnly {
    fn annotate(&self, start: usize, text: &[u8], kind: Kind) -> Option<Annotation> {
        (kind == Kind::Keyword).then(|| Annotation {
            start,
            end: start + text.len(),
            open: b"<b>".to_vec(),
            close: b"</b>".to_vec(),
        })
    }
}

#[test]
fn custom_annotator() {
    let got = annotate(b"return x", &KeywordsOnly);
    assert_eq!(
        got,
        vec![Annotation {
            start: 0,
            end: 6,
            open: b"<b>".to_vec(),
            close: b"</b>".to_vec(),
        }]
    );
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_annotate {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn spans_are_ordered_and_disjoint(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let anns = annotate(&bytes, &HtmlAnnotator::default());
            let mut last_end = 0;
            for ann in &anns {
                prop_assert!(ann.start >= last_end);
                prop_assert!(ann.end > ann.start);
                prop_assert!(ann.end <= bytes.len());
                last_end = ann.end;
            }
        }
    }
}
