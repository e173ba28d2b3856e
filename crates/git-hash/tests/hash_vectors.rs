use git_hash::hasher::{object_header, Hasher};
use git_hash::ObjectId;

// ── SHA-1 raw digest test vectors ───────────────────────────────────

#[test]
fn sha1_empty_string() {
    let oid = Hasher::digest(b"").unwrap();
    assert_eq!(oid.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn sha1_abc() {
    let oid = Hasher::digest(b"abc").unwrap();
    assert_eq!(oid.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
}

// ── git hash-object compatible test vectors ──────────────────────────
// These match `git hash-object --stdin` output.

#[test]
fn blob_empty() {
    let oid = Hasher::hash_blob(b"").unwrap();
    assert_eq!(oid.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
}

#[test]
fn blob_abc() {
    let oid = Hasher::hash_blob(b"abc").unwrap();
    assert_eq!(oid.to_hex(), "f2ba8f84ab5c1bce84a7b441cb1959cfc7093b7f");
}

#[test]
fn blob_hello_world() {
    let oid = Hasher::hash_blob(b"hello world").unwrap();
    assert_eq!(oid.to_hex(), "95d09f2b10159347eece71399a7e2e907ea3df4f");
}

#[test]
fn blob_hello_world_newline() {
    let oid = Hasher::hash_blob(b"hello world\n").unwrap();
    assert_eq!(oid.to_hex(), "3b18e512dba79e4c8300dd08aeb37f8e728b8dad");
}

#[test]
fn blob_equals_manual_header_digest() {
    let data = b"abc";
    let mut framed = object_header("blob", data.len());
    framed.extend_from_slice(data);
    assert_eq!(framed, b"blob 3\0abc");
    assert_eq!(Hasher::digest(&framed).unwrap(), Hasher::hash_blob(data).unwrap());
}

// ── Streaming hash (multi-chunk) ────────────────────────────────────

#[test]
fn streaming_matches_oneshot() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let oneshot = Hasher::digest(data).unwrap();

    let mut hasher = Hasher::new();
    for chunk in data.chunks(7) {
        hasher.update(chunk);
    }
    assert_eq!(oneshot, hasher.finalize().unwrap());
}

#[test]
fn write_trait() {
    use std::io::Write;

    let expected = Hasher::hash_blob(b"hello world").unwrap();

    let mut hasher = Hasher::new();
    hasher.write_all(&object_header("blob", 11)).unwrap();
    hasher.write_all(b"hello world").unwrap();
    assert_eq!(expected, hasher.finalize().unwrap());
}

// ── git object types ────────────────────────────────────────────────

#[test]
fn object_kind_changes_hash() {
    let data = b"some content";
    let blob = Hasher::hash_object("blob", data).unwrap();
    let tree = Hasher::hash_object("tree", data).unwrap();
    assert_ne!(blob, tree);
    assert_eq!(blob, Hasher::hash_blob(data).unwrap());
}

#[test]
fn hash_result_display_parse_roundtrip() {
    let oid = Hasher::hash_blob(b"test content").unwrap();
    let parsed: ObjectId = oid.to_string().parse().unwrap();
    assert_eq!(oid, parsed);
}
