use std::io::{Cursor, Read};
use strata_types::io_utils::{CountingReader, ReadLen};
use strata_types::schema::{TypeSchema, ValidityWindow};
use strata_types::{FormatVersion, StrataError, StrataResult};
use tracing::{debug, trace};


/// What the reader does about one field of one stream.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ReadDisposition {
    /// The writer did not emit it. Nothing is consumed; the object keeps its value.
    Absent,
    /// Decoded and assigned.
    Assign,
    /// Decoded, to stay aligned with the stream, then dropped.
    /// The writer still had the field; the reading code has retired it.
    Discard,
}

/// Presence is a fact about the writer's version; retirement is a property of the reader's.
pub fn read_disposition(
    window: &ValidityWindow,
    serialized_version: FormatVersion,
    current_version: FormatVersion,
) -> ReadDisposition {
    if !window.present_in(serialized_version) {
        ReadDisposition::Absent
    } else if window.wanted_by(current_version) {
        ReadDisposition::Assign
    } else {
        ReadDisposition::Discard
    }
}

/// Reads the version tag, then every field the writer emitted, into `obj`.
///
/// Returns the bytes consumed, and the version found in the tag.
/// On error, `obj` may be partially populated and should not be used.
pub fn decode<T, R: Read + ?Sized>(
    obj: &mut T,
    schema: &TypeSchema<T>,
    r: &mut R,
) -> StrataResult<(ReadLen, FormatVersion)> {
    let owner = schema.owner();
    let current_version = schema.current_version();
    let mut r = CountingReader::new(r);

    /* version_tag */
    let (_, serialized_version) =
        FormatVersion::deser(&mut r).map_err(|cause| StrataError::Header { owner, cause })?;

    /* fields */
    for field in schema.fields() {
        let disposition = read_disposition(field.window(), serialized_version, current_version);
        let res = match disposition {
            ReadDisposition::Absent => Ok(()),
            ReadDisposition::Assign => field.read_into(obj, &mut r),
            ReadDisposition::Discard => field.read_and_discard(&mut r),
        };
        res.map_err(|cause| StrataError::Deserialize {
            field: field.name(),
            owner,
            adapter: field.adapter_name(),
            current_version,
            serialized_version,
            cause,
        })?;
        trace!(owner, field = field.name(), ?disposition);
    }

    let r_len = r.r_len();
    debug!(
        owner,
        %serialized_version,
        %current_version,
        r_len = *r_len,
        "decoded"
    );
    Ok((r_len, serialized_version))
}

/// Decodes into a fresh default object.
pub fn decode_new<T: Default, R: Read + ?Sized>(
    schema: &TypeSchema<T>,
    r: &mut R,
) -> StrataResult<T> {
    let mut obj = T::default();
    decode(&mut obj, schema, r)?;
    Ok(obj)
}

pub fn decode_from_slice<T: Default>(schema: &TypeSchema<T>, buf: &[u8]) -> StrataResult<T> {
    let mut r = Cursor::new(buf);
    decode_new(schema, &mut r)
}
