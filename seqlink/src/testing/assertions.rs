//! Assertions for rendered hit lines.

/// Counts the anchors in a rendered line.
#[must_use]
pub fn count_anchors(line: &str) -> usize {
    line.matches("<a href=").count()
}

/// Asserts that `line` carries exactly one anchor, pointing at `href`.
pub fn assert_single_anchor(line: &str, href: &str) {
    assert_eq!(
        count_anchors(line),
        1,
        "Expected exactly one anchor in line: {line:?}"
    );
    assert!(
        line.contains(&format!("href='{href}'")),
        "Expected anchor to point at '{href}', got line: {line:?}"
    );
}

/// Asserts that `line` carries two anchors: `custom` first, then `standard`.
pub fn assert_two_anchors(line: &str, custom: &str, standard: &str) {
    assert_eq!(
        count_anchors(line),
        2,
        "Expected two anchors in line: {line:?}"
    );

    let custom_at = line.find(&format!("href='{custom}'"));
    let standard_at = line.find(&format!("href='{standard}'"));
    match (custom_at, standard_at) {
        (Some(c), Some(s)) => assert!(
            c < s,
            "Expected custom link before standard link in line: {line:?}"
        ),
        _ => panic!("Expected hrefs '{custom}' and '{standard}' in line: {line:?}"),
    }
}
