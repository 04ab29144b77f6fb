use std::io::Write;
use strata_types::io_utils::{CountingWriter, WriteLen};
use strata_types::schema::TypeSchema;
use strata_types::{StrataError, StrataResult};
use tracing::{debug, trace};


/// Writes the version tag, then every field included at the schema's current version.
///
/// On error, whatever has already been written to `w` is not a usable encoding.
pub fn encode<T, W: Write + ?Sized>(
    obj: &T,
    schema: &TypeSchema<T>,
    w: &mut W,
) -> StrataResult<WriteLen> {
    let owner = schema.owner();
    let current_version = schema.current_version();
    let mut w = CountingWriter::new(w);

    /* version_tag */
    current_version
        .ser(&mut w)
        .map_err(|cause| StrataError::Header { owner, cause })?;

    /* fields */
    for field in schema.fields() {
        if !field.window().includes_on_write(current_version) {
            trace!(owner, field = field.name(), %current_version, "not written");
            continue;
        }

        field
            .write_from(obj, &mut w)
            .map_err(|cause| StrataError::Serialize {
                field: field.name(),
                owner,
                adapter: field.adapter_name(),
                current_version,
                cause,
            })?;
        trace!(owner, field = field.name(), "written");
    }

    let w_len = w.w_len();
    debug!(owner, %current_version, w_len = *w_len, "encoded");
    Ok(w_len)
}

pub fn encode_to_vec<T>(obj: &T, schema: &TypeSchema<T>) -> StrataResult<Vec<u8>> {
    let mut buf = vec![];
    encode(obj, schema, &mut buf)?;
    Ok(buf)
}
