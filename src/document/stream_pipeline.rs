use crate::{
    types::{Dictionary, ObjectId},
    LowTuxPdfError,
};

use super::security::SecurityHandler;

/// Deflates `bytes` with zlib framing at the default compression level.
///
/// Used for the compressed cross-reference stream's payload and, via
/// [`run_stream_pipeline`], for any outgoing stream whose dictionary
/// declares a filter but whose bytes are not already encoded.
#[cfg(feature = "compression")]
pub fn deflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::{write::ZlibEncoder, Compression};
    use std::io::Write;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

#[cfg(not(feature = "compression"))]
pub fn deflate(_bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "the `compression` feature is disabled; enable it to emit FlateDecode streams",
    ))
}

/// Runs a stream's bytes through the writer's two-stage pipeline: compress,
/// then encrypt. Never the reverse — a security handler that only ever sees
/// ciphertext-of-ciphertext would make the wrong key's garbage look like a
/// bitstream error instead of an ordering bug.
///
/// `already_compressed` reflects what the caller (the change-tracker) knows
/// about the bytes it handed over: pass-through data the source document
/// already encoded should not be deflated a second time even though the
/// dictionary still declares `Filter`.
///
/// On return, `dictionary` has had `Length` set to the final (post-pipeline)
/// byte count, and — only when a security handler actually ran — `FormType`
/// set to `1`, matching what the reference writer stamps on every encrypted
/// stream object.
pub fn run_stream_pipeline(
    reference: ObjectId,
    dictionary: &mut Dictionary,
    raw_bytes: Vec<u8>,
    already_compressed: bool,
    security: Option<&dyn SecurityHandler>,
) -> Result<Vec<u8>, LowTuxPdfError> {
    let declares_filter = dictionary.contains_key("Filter");

    let mut bytes = raw_bytes;
    if declares_filter && !already_compressed {
        bytes = deflate(&bytes).map_err(|source| LowTuxPdfError::CompressionError { reference, source })?;
    }

    if let Some(handler) = security {
        let decode_params = dictionary
            .get("DecodeParms")
            .and_then(|value| value.as_dictionary());
        bytes = handler
            .encrypt_stream(reference, decode_params, &bytes)
            .map_err(|message| LowTuxPdfError::EncryptionError { reference, message })?;
        dictionary.set("FormType", 1i64);
    }

    dictionary.set("Length", bytes.len() as i64);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary;

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

    #[test]
    fn sets_length_and_skips_compression_without_filter() {
        let mut dict = dictionary! {};
        let reference = ObjectId::from(4);
        let bytes = run_stream_pipeline(reference, &mut dict, b"hello".to_vec(), false, None).unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(dict.get("Length").unwrap(), &crate::types::Object::Integer(5));
        assert!(!dict.contains_key("FormType"));
    }

    #[test]
    fn encryption_runs_after_compression_and_sets_form_type() {
        let mut dict = dictionary! { "Filter" => crate::types::Name::from("FlateDecode") };
        let reference = ObjectId::from(9);
        let handler = UppercaseCipher;
        let bytes =
            run_stream_pipeline(reference, &mut dict, b"abc".to_vec(), true, Some(&handler)).unwrap();
        // already_compressed == true, so the deflate step is skipped; the
        // handler only ever sees the raw bytes uppercased.
        assert_eq!(bytes, b"ABC");
        assert_eq!(dict.get("FormType").unwrap(), &crate::types::Object::Integer(1));
        assert_eq!(dict.get("Length").unwrap(), &crate::types::Object::Integer(3));
    }
}
