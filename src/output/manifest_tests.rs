use super::*;

fn sample_index() -> DigestIndex {
    let mut index = DigestIndex::new();
    index.record("bbbb".to_string(), "b/one.txt");
    index.record("aaaa".to_string(), "a/two.txt");
    index.record("bbbb".to_string(), "c/one-copy.txt");
    index
}

fn render(index: &DigestIndex) -> String {
    let mut buf = Vec::new();
    write_manifest(index, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn manifest_groups_duplicates_under_first_seen_digest() {
    assert_eq!(
        render(&sample_index()),
        "bbbb  b/one.txt\nbbbb  c/one-copy.txt\naaaa  a/two.txt\n"
    );
}

#[test]
fn empty_index_writes_nothing() {
    assert_eq!(render(&DigestIndex::new()), "");
}
