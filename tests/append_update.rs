mod test_utils;

use tux_pdf_low::{
    dictionary,
    document::{append_update, ChangeTracker, ChangedObject, PriorTrailer, SecurityHandler},
    types::{Dictionary, Name, Object, ObjectId, PdfString, Stream},
};

struct FixedChangeSet {
    trailer: PriorTrailer,
    changes: Vec<ChangedObject>,
}
impl ChangeTracker for FixedChangeSet {
    fn changed_count(&self) -> usize {
        self.changes.len()
    }
    fn is_changed(&self, object_number: u32) -> bool {
        self.changes
            .iter()
            .any(|c| c.reference().object_number() == object_number)
    }
    fn iter_sorted_by_object_number(&self) -> Box<dyn Iterator<Item = ChangedObject> + '_> {
        Box::new(self.changes.iter().cloned())
    }
    fn trailer(&self) -> &PriorTrailer {
        &self.trailer
    }
}

fn classical_trailer(size: u32, position: u64) -> PriorTrailer {
    PriorTrailer {
        is_xref_stream: false,
        dictionary: dictionary! { "Root" => ObjectId::new(1, 0) },
        size,
        position,
    }
}

/// S1 — single modified dictionary.
#[test]
fn s1_single_modified_dictionary() {
    test_utils::init_logger();
    let tracker = FixedChangeSet {
        trailer: classical_trailer(10, 1000),
        changes: vec![ChangedObject::Modified {
            reference: ObjectId::new(5, 0),
            value: Object::Dictionary(dictionary! {
                "Type" => Name::from("Annot"),
                "Rect" => vec![0i64, 0, 100, 100]
            }),
        }],
    };

    let mut out = Vec::new();
    append_update(&mut out, &tracker, 1000, None).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("\r\n"));
    assert!(text.contains("5 0 obj\r\n<<"));
    assert!(text.contains(">>\r\nendobj\r\n"));
    assert!(text.contains("0 1\r\n"));
    assert!(text.contains("5 1\r\n"));
    assert!(text.contains("/Prev 1000"));
    assert!(text.contains("/Size 10"));
}

/// S2 — deleted object joins the free-list chain without an object body.
#[test]
fn s2_deleted_object() {
    let tracker = FixedChangeSet {
        trailer: classical_trailer(8, 500),
        changes: vec![ChangedObject::Deleted {
            reference: ObjectId::new(7, 0),
        }],
    };

    let mut out = Vec::new();
    append_update(&mut out, &tracker, 500, None).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(!text.contains("7 0 obj"));
    // object 0's pseudo-entry points at 7; object 7 points back at 0.
    assert!(text.contains("0000000007 65535 f\r\n"));
    assert!(text.contains("0000000000 00001 f\r\n"));
}

struct UppercaseCipher;
impl SecurityHandler for UppercaseCipher {
    fn encrypt_stream(
        &self,
        _reference: ObjectId,
        _decode_params: Option<&Dictionary>,
        bytes: &[u8],
    ) -> Result<Vec<u8>, String> {
        Ok(bytes.iter().map(u8::to_ascii_uppercase).collect())
    }
}

/// S3 — new indirect stream, compressed then encrypted; Length matches the
/// final ciphertext and the ordering is never reversed.
#[test]
fn s3_new_indirect_stream_encrypted() {
    let stream = Stream::new(
        dictionary! { "Filter" => Name::from("FlateDecode") },
        b"hello".to_vec(),
    );
    let tracker = FixedChangeSet {
        trailer: classical_trailer(12, 2000),
        changes: vec![ChangedObject::Modified {
            reference: ObjectId::new(12, 0),
            value: Object::Stream(stream),
        }],
    };

    let handler = UppercaseCipher;
    let mut out = Vec::new();
    append_update(&mut out, &tracker, 2000, Some(&handler)).unwrap();
    let text_bytes = out;

    let obj_start = find_subslice(&text_bytes, b"12 0 obj\r\n").unwrap();
    let stream_start = find_subslice(&text_bytes[obj_start..], b"\r\nstream\r\n").unwrap() + obj_start + 10;
    let stream_end = find_subslice(&text_bytes[stream_start..], b"\r\nendstream").unwrap() + stream_start;
    let ciphertext = &text_bytes[stream_start..stream_end];

    // Never plaintext "hello", nor the raw deflate of it — it went through
    // the (fake, uppercasing) cipher on top of compression.
    assert_ne!(ciphertext, b"hello");
    assert!(ciphertext.iter().all(|b| !b.is_ascii_lowercase()));

    let dict_text = String::from_utf8_lossy(&text_bytes[obj_start..stream_start]).into_owned();
    assert!(dict_text.contains(&format!("/Length {}", ciphertext.len())));
    assert!(dict_text.contains("/FormType 1"));
}

/// S4 — compressed xref trailer: no textual `xref`/`trailer` keywords, a
/// fresh `/XRef` stream object instead.
#[test]
fn s4_compressed_xref_trailer() {
    let tracker = FixedChangeSet {
        trailer: PriorTrailer {
            is_xref_stream: true,
            dictionary: dictionary! { "Root" => ObjectId::new(1, 0), "Type" => Name::from("XRef") },
            size: 21,
            position: 5000,
        },
        changes: vec![ChangedObject::Modified {
            reference: ObjectId::new(20, 0),
            value: Object::Integer(42),
        }],
    };

    let mut out = Vec::new();
    append_update(&mut out, &tracker, 5000, None).unwrap();
    let text = String::from_utf8_lossy(&out);

    assert!(!text.contains("\r\nxref\r\n"));
    assert!(!text.contains("\r\ntrailer\r\n"));
    assert!(text.contains("21 0 obj\r\n"));
    assert!(text.contains("/W[4 8 4]"));
    assert!(text.contains("startxref\r\n"));
    assert!(text.contains("%%EOF\r\n"));
}

/// S5 — a prior trailer with no known position forces `startxref -1`, even
/// though this update's own xref section sits at a real, nonzero offset.
#[test]
fn s5_linear_traversed_source_forces_minus_one() {
    let tracker = FixedChangeSet {
        trailer: classical_trailer(3, 0),
        changes: vec![ChangedObject::Modified {
            reference: ObjectId::new(2, 0),
            value: Object::Integer(1),
        }],
    };

    let mut out = Vec::new();
    append_update(&mut out, &tracker, 800, None).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("startxref\r\n-1\r\n%%EOF\r\n"));
}

/// S6 — a Name with a space and a `#` is fully hex-escaped byte by byte.
#[test]
fn s6_name_with_special_bytes_is_escaped() {
    let tracker = FixedChangeSet {
        trailer: classical_trailer(4, 300),
        changes: vec![ChangedObject::Modified {
            reference: ObjectId::new(3, 0),
            value: Object::Name(Name::from("A B#C")),
        }],
    };

    let mut out = Vec::new();
    append_update(&mut out, &tracker, 300, None).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("/A#20B#23C"));
}

/// Invariant 7 — `is_changed() == false` across the board means zero bytes
/// written: an empty change set is a true no-op, not a minimal update.
#[test]
fn empty_change_set_writes_nothing() {
    let tracker = FixedChangeSet {
        trailer: classical_trailer(1, 100),
        changes: vec![],
    };
    let mut out = Vec::new();
    let written = append_update(&mut out, &tracker, 100, None).unwrap();
    assert_eq!(written, 0);
    assert!(out.is_empty());
}

#[test]
fn literal_string_rejects_unescaped_parens() {
    let err = PdfString::from_escaped_literal(b"not (balanced".to_vec()).unwrap_err();
    assert!(matches!(
        err,
        tux_pdf_low::LowTuxPdfError::InvalidStringKind
    ));
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
