use std::io::Write;

use crate::{
    types::{Dictionary, PdfObjectType},
    utils::CountingWriter,
    LowTuxPdfError,
};

use super::entry_table::EntryTable;

/// The trailer this update is chaining onto: either the previous
/// incremental update's trailer dictionary, or the original document's,
/// whichever the driver most recently wrote or parsed.
///
/// `dictionary` is cloned wholesale and re-keyed rather than rebuilt field
/// by field — `Root`, `Info`, `ID`, and any vendor-private keys the source
/// document carries ride through untouched unless this update's trailer
/// writer explicitly overwrites them.
#[derive(Debug, Clone)]
pub struct PriorTrailer {
    /// Whether the prior cross-reference section was a compressed stream
    /// (`/Type /XRef`) rather than the classical `xref` table. An update
    /// keeps using whichever form its predecessor used (spec §4.8).
    pub is_xref_stream: bool,
    pub dictionary: Dictionary,
    pub size: u32,
    /// Byte offset of the prior trailer's xref section — always copied
    /// into this update's `Prev`, even when it is `0`. A `0` here means
    /// the parser that produced this change set could not locate the
    /// prior xref by random access and fell back to linear traversal; see
    /// [`write_startxref_tail`].
    pub position: u64,
}

/// Emits the classical trailer: `trailer\r\n<< ... >>\r\n\r\nstartxref\r\n
/// <offset>\r\n%%EOF\r\n`.
///
/// `entries` supplies the greatest object number touched by this update,
/// needed to compute `Size`. `xref_position` is the offset of the `xref`
/// keyword just written by [`super::xref::write_classical_xref`].
pub fn write_classical_trailer<W>(
    writer: &mut CountingWriter<W>,
    prior: &PriorTrailer,
    entries: &EntryTable,
    xref_position: u64,
) -> Result<(), LowTuxPdfError>
where
    W: std::io::Write,
{
    let mut dictionary = prior.dictionary.clone();
    let size = prior.size.max(entries.greatest_object_number() + 1);
    dictionary.set("Size", size as i64);
    dictionary.set("Prev", prior.position as i64);
    // A hybrid-reference trailer's `XRefStm` points at a compressed
    // section that only applied to the predecessor it was written beside;
    // it never survives into the next update.
    dictionary.remove("XRefStm");

    writer.write_all(b"trailer\r\n")?;
    dictionary.encode_borrowed(writer)?;
    writer.write_all(b"\r\n\r\n")?;
    write_startxref_tail(writer, prior, xref_position)
}

/// Emits `startxref\r\n<value>\r\n%%EOF\r\n`.
///
/// `value` is normally `xref_position`, the byte offset of the xref
/// section this update just wrote. When the prior trailer's `position` is
/// `0` — the document was loaded via linear traversal rather than by
/// following a trustworthy `startxref` — emit `-1` instead, so a
/// random-access reader that trusts this value doesn't jump somewhere
/// meaningless; it keeps reading linearly, the only mode this document has
/// ever proven itself under.
pub fn write_startxref_tail<W>(
    writer: &mut CountingWriter<W>,
    prior: &PriorTrailer,
    xref_position: u64,
) -> Result<(), LowTuxPdfError>
where
    W: std::io::Write,
{
    let value: i64 = if prior.position == 0 {
        -1
    } else {
        xref_position as i64
    };
    write!(writer, "startxref\r\n{value}\r\n%%EOF\r\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dictionary, types::ObjectId};

    fn entries_through(n: u32) -> EntryTable {
        let mut entries = EntryTable::new();
        entries.append_used(ObjectId::new(n, 0), 1).unwrap();
        entries
    }

    #[test]
    fn chains_prev_to_the_prior_xref_offset() {
        let prior = PriorTrailer {
            is_xref_stream: false,
            dictionary: dictionary! { "Root" => ObjectId::new(1, 0) },
            size: 10,
            position: 1000,
        };
        let mut sink = CountingWriter::new(Vec::new());
        write_classical_trailer(&mut sink, &prior, &entries_through(5), 9001).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("trailer\r\n<<"));
        assert!(text.contains("/Prev 1000"));
        assert!(text.contains("/Size 10"));
        assert!(text.ends_with("startxref\r\n9001\r\n%%EOF\r\n"));
    }

    #[test]
    fn grows_size_past_the_prior_value_when_a_higher_object_number_is_touched() {
        let prior = PriorTrailer {
            is_xref_stream: false,
            dictionary: dictionary! { "Root" => ObjectId::new(1, 0) },
            size: 6,
            position: 1000,
        };
        let mut sink = CountingWriter::new(Vec::new());
        write_classical_trailer(&mut sink, &prior, &entries_through(9), 9001).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("/Size 10"));
    }

    #[test]
    fn forces_startxref_to_minus_one_when_the_prior_position_is_unknown() {
        let prior = PriorTrailer {
            is_xref_stream: false,
            dictionary: dictionary! { "Root" => ObjectId::new(1, 0) },
            size: 3,
            position: 0,
        };
        let mut sink = CountingWriter::new(Vec::new());
        write_classical_trailer(&mut sink, &prior, &entries_through(2), 200).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("/Prev 0"));
        assert!(text.ends_with("startxref\r\n-1\r\n%%EOF\r\n"));
    }

    #[test]
    fn strips_xrefstm_from_a_cloned_hybrid_trailer() {
        let prior = PriorTrailer {
            is_xref_stream: false,
            dictionary: dictionary! {
                "Root" => ObjectId::new(1, 0),
                "XRefStm" => 77i64
            },
            size: 2,
            position: 1000,
        };
        let mut sink = CountingWriter::new(Vec::new());
        write_classical_trailer(&mut sink, &prior, &entries_through(1), 10).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!text.contains("XRefStm"));
    }
}
