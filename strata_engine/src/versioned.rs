use crate::{decode, encode, SchemaRegistry};
use std::io::{Cursor, Read, Write};
use std::sync::Arc;
use strata_types::io_utils::{ReadLen, WriteLen};
use strata_types::schema::TypeSchema;
use strata_types::{FormatVersion, StrataResult};

/// A type that writes and reads itself through its own schema.
///
/// Implementors only declare [`Versioned::resolve_schema`], typically from within the
/// type's own module, which is what gives the declarations access to private members.
pub trait Versioned: Sized + 'static {
    fn resolve_schema() -> StrataResult<TypeSchema<Self>>;

    /// Resolved once per process, through [`SchemaRegistry::global`].
    fn schema() -> StrataResult<Arc<TypeSchema<Self>>> {
        SchemaRegistry::global().get_or_resolve::<Self>()
    }

    fn write_versioned<W: Write + ?Sized>(&self, w: &mut W) -> StrataResult<WriteLen> {
        let schema = Self::schema()?;
        encode(self, &schema, w)
    }

    fn read_versioned<R: Read + ?Sized>(
        &mut self,
        r: &mut R,
    ) -> StrataResult<(ReadLen, FormatVersion)> {
        let schema = Self::schema()?;
        decode(self, &schema, r)
    }

    fn to_versioned_bytes(&self) -> StrataResult<Vec<u8>> {
        let mut buf = vec![];
        self.write_versioned(&mut buf)?;
        Ok(buf)
    }

    fn from_versioned_bytes(buf: &[u8]) -> StrataResult<Self>
    where
        Self: Default,
    {
        let mut moi = Self::default();
        moi.read_versioned(&mut Cursor::new(buf))?;
        Ok(moi)
    }
}
