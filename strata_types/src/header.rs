//! # Version tag
//!
//! Every encoded object starts with the version tag of the code that wrote it.
//! The tag is a fixed-width big-endian `u32`; it is the only framing the format has.
//!
//! ```text
//! struct VersionedObject {
//!     version_tag:    [u8; VERSION_TAG_LEN],
//!     field_0:        [u8; ?],    // present iff included at version_tag
//!     field_1:        [u8; ?],
//!     ...
//! }
//! ```

use derive_more::{Deref, Display, From, Into};
use std::io::{self, Read, Write};
use std::mem;

pub const VERSION_TAG_LEN: usize = mem::size_of::<u32>();

/// The version a type declares when it declares none.
pub const DEFAULT_VERSION: FormatVersion = FormatVersion(1);
/// The version a field is introduced at when it declares no `since`.
pub const DEFAULT_SINCE: FormatVersion = FormatVersion(1);

#[derive(From, Into, Deref, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct FormatVersion(u32);

impl FormatVersion {
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    pub fn ser(&self, w: &mut impl Write) -> Result<usize, io::Error> {
        let buf = self.0.to_be_bytes();
        w.write_all(&buf)?;
        Ok(buf.len())
    }

    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; VERSION_TAG_LEN];
        r.read_exact(&mut buf)?;
        let int = u32::from_be_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}
