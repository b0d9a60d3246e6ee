use textcompare::{compare, compare_buffers, ComparisonResult, EditOp, OpKind, TextBuffer};

fn op(kind: OpKind, a: std::ops::Range<usize>, b: std::ops::Range<usize>) -> EditOp {
    EditOp::new(kind, a, b)
}

fn mirrored(result: &ComparisonResult) -> Vec<EditOp> {
    result.ops().iter().map(|op| op.mirrored()).collect()
}

#[test]
fn test_identity() {
    let result = compare("abc", "abc");
    assert_eq!(result.ops(), &[op(OpKind::Equal, 0..3, 0..3)]);
    assert_eq!(result.similarity_ratio(), 1.0);
    assert!(result.is_identical());

    // two empty texts produce no ops at all
    let result = compare("", "");
    assert!(result.ops().is_empty());
    assert_eq!(result.similarity_ratio(), 1.0);
    assert!(result.is_identical());
}

#[test]
fn test_empty_side() {
    let result = compare("", "abc");
    assert_eq!(result.ops(), &[op(OpKind::Insert, 0..0, 0..3)]);
    assert_eq!(result.similarity_ratio(), 0.0);
    assert_eq!(result.added_chars(), 3);

    let result = compare("abc", "");
    assert_eq!(result.ops(), &[op(OpKind::Delete, 0..3, 0..0)]);
    assert_eq!(result.similarity_ratio(), 0.0);
    assert_eq!(result.deleted_chars(), 3);
}

#[test]
fn test_disjoint() {
    let result = compare("abc", "xyz");
    assert_eq!(result.ops(), &[op(OpKind::Replace, 0..3, 0..3)]);
    assert_eq!(result.similarity_ratio(), 0.0);
    assert_eq!(result.different_chars(), 6);
}

#[test]
fn test_simple_append() {
    let result = compare("Hello World", "Hello World!");
    assert_eq!(
        result.ops(),
        &[
            op(OpKind::Equal, 0..11, 0..11),
            op(OpKind::Insert, 11..11, 11..12)
        ]
    );
    assert_eq!(result.matched_chars(), 11);
    assert!((result.similarity_ratio() - 22.0 / 23.0).abs() < 1e-12);
    assert_eq!(format!("{:.4}", result.similarity_ratio()), "0.9565");

    let reverse = compare("Hello World!", "Hello World");
    assert_eq!(reverse.ops(), &mirrored(&result)[..]);
    assert_eq!(reverse.similarity_ratio(), result.similarity_ratio());
}

#[test]
fn test_substitution() {
    let result = compare("The quick brown fox", "The quick brown cat");
    assert_eq!(
        result.ops(),
        &[
            op(OpKind::Equal, 0..16, 0..16),
            op(OpKind::Replace, 16..19, 16..19)
        ]
    );
    assert_eq!(result.matched_chars(), 16);

    let reverse = compare("The quick brown cat", "The quick brown fox");
    assert_eq!(reverse.ops(), &mirrored(&result)[..]);
    assert_eq!(reverse.similarity_ratio(), result.similarity_ratio());
}

#[test]
fn test_inserted_whitespace() {
    let a = TextBuffer::new("Hello World");
    let b = TextBuffer::new("Hello  World");
    let result = compare_buffers(&a, &b);
    assert_eq!(
        result.ops(),
        &[
            op(OpKind::Equal, 0..6, 0..6),
            op(OpKind::Insert, 6..6, 6..7),
            op(OpKind::Equal, 6..11, 7..12),
        ]
    );
    assert_eq!(b.slice(result.ops()[1].b_range()), " ");
    assert_eq!(result.added_chars(), 1);

    let reverse = compare("Hello  World", "Hello World");
    assert_eq!(reverse.ops(), &mirrored(&result)[..]);
}

#[test]
fn test_control_characters() {
    let result = compare("a\tb\n", "a b\r\n");
    insta::assert_snapshot!(
        result.ops().iter().map(|op| op.to_string()).collect::<Vec<_>>().join("\n"),
        @r###"
    equal(0,1,0,1)
    replace(1,2,1,2)
    equal(2,3,2,3)
    insert(3,3,3,4)
    equal(3,4,4,5)
    "###
    );
    assert_eq!(result.matched_chars(), 3);
}

#[test]
fn test_multibyte_positions() {
    let result = compare("naïve café", "naive cafe");
    assert_eq!(
        result.ops(),
        &[
            op(OpKind::Equal, 0..2, 0..2),
            op(OpKind::Replace, 2..3, 2..3),
            op(OpKind::Equal, 3..9, 3..9),
            op(OpKind::Replace, 9..10, 9..10),
        ]
    );
    assert_eq!(result.total_chars_a(), 10);
}

#[test]
fn test_crossing_matches_are_not_mirrored() {
    // both texts share two single chars that cannot both be kept; the
    // earliest one in `a` wins in each direction
    let result = compare("ab", "ba");
    assert_eq!(
        result.ops(),
        &[
            op(OpKind::Insert, 0..0, 0..1),
            op(OpKind::Equal, 0..1, 1..2),
            op(OpKind::Delete, 1..2, 2..2),
        ]
    );
    let reverse = compare("ba", "ab");
    assert_eq!(reverse.ops(), result.ops());
    assert_eq!(reverse.similarity_ratio(), 0.5);
    assert_eq!(result.similarity_ratio(), 0.5);
}

#[test]
fn test_longest_block_wins() {
    // the longest common run is matched even though it costs more edits
    let result = compare("abcXdefgh", "defghabc");
    insta::assert_debug_snapshot!(result.ops().iter().map(|op| op.to_string()).collect::<Vec<_>>(), @r###"
    [
        "delete(0,4,0,0)",
        "equal(4,9,0,5)",
        "insert(9,9,5,8)",
    ]
    "###);
    assert_eq!(result.matched_chars(), 5);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_contract() {
    let result = compare("Hello World", "Hello World!");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "similarity_ratio": result.similarity_ratio(),
            "total_chars_a": 11,
            "total_chars_b": 12,
            "matched_chars": 11,
            "different_chars": 1,
            "ops": [
                {"kind": "equal", "a_start": 0, "a_end": 11, "b_start": 0, "b_end": 11},
                {"kind": "insert", "a_start": 11, "a_end": 11, "b_start": 11, "b_end": 12},
            ],
        })
    );

    let back: ComparisonResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}

#[cfg(feature = "serde")]
#[test]
fn test_op_kind_names() {
    for kind in [OpKind::Equal, OpKind::Insert, OpKind::Delete, OpKind::Replace].iter() {
        assert_eq!(
            serde_json::to_value(kind).unwrap(),
            serde_json::Value::String(kind.to_string())
        );
    }
}
