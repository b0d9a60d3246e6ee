use proptest::prelude::*;
use textcompare::{compare, compare_buffers, CompareConfig, ComparisonResult, OpKind, TextBuffer};

/// Texts over a tiny alphabet so that matches, ties and gaps are common.
fn small_text() -> impl Strategy<Value = String> {
    "[ab \t\n]{0,24}"
}

fn assert_well_formed(
    result: &ComparisonResult,
    a: &TextBuffer<'_>,
    b: &TextBuffer<'_>,
) -> Result<(), TestCaseError> {
    let mut a_pos = 0;
    let mut b_pos = 0;
    let mut rebuilt_a = String::new();
    let mut rebuilt_b = String::new();
    let mut prev_kind = None;

    for op in result.ops() {
        prop_assert_eq!(op.a_start, a_pos);
        prop_assert_eq!(op.b_start, b_pos);
        match op.kind {
            OpKind::Equal => {
                prop_assert!(op.a_len() > 0);
                prop_assert_eq!(a.slice(op.a_range()), b.slice(op.b_range()));
            }
            OpKind::Insert => prop_assert!(op.a_len() == 0 && op.b_len() > 0),
            OpKind::Delete => prop_assert!(op.a_len() > 0 && op.b_len() == 0),
            OpKind::Replace => prop_assert!(op.a_len() > 0 && op.b_len() > 0),
        }
        // runs are maximal: two equal ops or two changes never touch
        if let Some(prev) = prev_kind {
            prop_assert!((prev == OpKind::Equal) != (op.kind == OpKind::Equal));
        }
        prev_kind = Some(op.kind);

        rebuilt_a.push_str(a.slice(op.a_range()));
        rebuilt_b.push_str(b.slice(op.b_range()));
        a_pos = op.a_end;
        b_pos = op.b_end;
    }

    prop_assert_eq!(rebuilt_a.as_str(), a.as_str());
    prop_assert_eq!(rebuilt_b.as_str(), b.as_str());
    Ok(())
}

proptest! {
    #[test]
    fn ops_cover_both_texts(a in small_text(), b in small_text()) {
        let (a, b) = (TextBuffer::new(&a), TextBuffer::new(&b));
        let result = compare_buffers(&a, &b);
        assert_well_formed(&result, &a, &b)?;
    }

    #[test]
    fn ops_cover_unicode_texts(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let (a, b) = (TextBuffer::new(&a), TextBuffer::new(&b));
        let result = compare_buffers(&a, &b);
        assert_well_formed(&result, &a, &b)?;
    }

    #[test]
    fn autojunk_results_are_well_formed(
        a in "[ab ]{150,260}",
        b in "[ab c]{190,260}",
    ) {
        let (a, b) = (TextBuffer::new(&a), TextBuffer::new(&b));
        let result = CompareConfig::default().autojunk(true).compare_buffers(&a, &b).unwrap();
        assert_well_formed(&result, &a, &b)?;
    }

    #[test]
    fn identity(text in "\\PC{0,32}") {
        let result = compare(&text, &text);
        prop_assert_eq!(result.similarity_ratio(), 1.0);
        if text.is_empty() {
            prop_assert!(result.ops().is_empty());
        } else {
            prop_assert_eq!(result.ops().len(), 1);
            prop_assert_eq!(result.ops()[0].kind, OpKind::Equal);
            prop_assert_eq!(result.ops()[0].a_len(), text.chars().count());
        }
    }

    #[test]
    fn ratio_bounds(a in small_text(), b in small_text()) {
        let result = compare(&a, &b);
        let ratio = result.similarity_ratio();
        prop_assert!((0.0..=1.0).contains(&ratio));
        prop_assert_eq!(ratio == 1.0, a == b);

        let total = result.total_chars_a() + result.total_chars_b();
        if total > 0 {
            prop_assert_eq!(ratio == 0.0, result.matched_chars() == 0);
            let expected = 2.0 * result.matched_chars() as f64 / total as f64;
            prop_assert_eq!(ratio, expected);
        }
        prop_assert_eq!(
            result.different_chars(),
            result.added_chars()
                + result.deleted_chars()
                + result.replaced_chars_a()
                + result.replaced_chars_b()
        );
    }

    #[test]
    fn replace_gaps_share_nothing(a in small_text(), b in small_text()) {
        let (a, b) = (TextBuffer::new(&a), TextBuffer::new(&b));
        let result = compare_buffers(&a, &b);
        for op in result.ops().iter().filter(|op| op.kind == OpKind::Replace) {
            let old = a.slice(op.a_range());
            prop_assert!(!b.slice(op.b_range()).chars().any(|c| old.contains(c)));
        }
    }

    #[test]
    fn append_is_mirrored(base in "[a-m]{1,20}", tail in "[n-z]{1,5}") {
        let extended = format!("{}{}", base, tail);
        let forward = compare(&base, &extended);
        let backward = compare(&extended, &base);

        prop_assert_eq!(forward.ops().len(), 2);
        prop_assert_eq!(forward.ops()[1].kind, OpKind::Insert);
        let mirrored = forward.ops().iter().map(|op| op.mirrored()).collect::<Vec<_>>();
        prop_assert_eq!(backward.ops(), &mirrored[..]);
        prop_assert_eq!(backward.similarity_ratio(), forward.similarity_ratio());
    }
}
