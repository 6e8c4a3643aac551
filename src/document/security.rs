use crate::types::{Dictionary, ObjectId};

/// The document's encryption collaborator, external to this writer.
///
/// Computing the actual cipher (RC4/AES key schedule, per-object key
/// derivation) is out of scope here — it belongs to the security manager
/// the host document maintains. This trait is the seam [`super::stream_pipeline`]
/// calls through: given the object reference, the stream's own
/// `DecodeParms` (or `None` to fall back to the document-wide crypt
/// filter), and the already-compressed bytes, it returns ciphertext.
pub trait SecurityHandler {
    fn encrypt_stream(
        &self,
        reference: ObjectId,
        decode_params: Option<&Dictionary>,
        bytes: &[u8],
    ) -> Result<Vec<u8>, String>;
}
