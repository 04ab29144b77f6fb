use crate::adapter::FieldAdapter;
use crate::FieldFailure;
use anyhow::Result;
use std::io::{Read, Write};
use std::sync::Arc;

pub(crate) type Getter<T, V> = Box<dyn Fn(&T) -> &V + Send + Sync>;
pub(crate) type GetterMut<T, V> = Box<dyn Fn(&mut T) -> &mut V + Send + Sync>;
pub(crate) type FallibleGetter<T, V> = Box<dyn Fn(&T) -> Result<V> + Send + Sync>;
pub(crate) type FallibleSetter<T, V> = Box<dyn Fn(&mut T, V) -> Result<()> + Send + Sync>;

/// How the schema reaches into an object for one field's value.
pub(crate) enum Access<T, V> {
    /// A plain struct member.
    Direct {
        get: Getter<T, V>,
        get_mut: GetterMut<T, V>,
    },
    /// Internal accessors that may refuse, e.g. a setter that checks an invariant.
    Fallible {
        get: FallibleGetter<T, V>,
        set: FallibleSetter<T, V>,
    },
}

/// One field, with its adapter already constructed, and its value type erased.
pub(crate) trait FieldCodec<T>: Send + Sync {
    fn write_from(&self, obj: &T, w: &mut dyn Write) -> Result<(), FieldFailure>;
    fn read_into(&self, obj: &mut T, r: &mut dyn Read) -> Result<(), FieldFailure>;
    fn read_and_discard(&self, r: &mut dyn Read) -> Result<(), FieldFailure>;
}

pub(crate) struct BoundCodec<T, A: FieldAdapter> {
    pub(crate) adapter: A,
    pub(crate) access: Access<T, A::Value>,
}

impl<T, A: FieldAdapter> FieldCodec<T> for BoundCodec<T, A> {
    fn write_from(&self, obj: &T, w: &mut dyn Write) -> Result<(), FieldFailure> {
        match &self.access {
            Access::Direct { get, .. } => self
                .adapter
                .write(w, get(obj))
                .map_err(FieldFailure::from_codec),
            Access::Fallible { get, .. } => {
                let val = get(obj).map_err(FieldFailure::Access)?;
                self.adapter
                    .write(w, &val)
                    .map_err(FieldFailure::from_codec)
            }
        }
    }

    fn read_into(&self, obj: &mut T, r: &mut dyn Read) -> Result<(), FieldFailure> {
        let val = self.adapter.read(r).map_err(FieldFailure::from_codec)?;
        match &self.access {
            Access::Direct { get_mut, .. } => {
                *get_mut(obj) = val;
                Ok(())
            }
            Access::Fallible { set, .. } => set(obj, val).map_err(FieldFailure::Access),
        }
    }

    fn read_and_discard(&self, r: &mut dyn Read) -> Result<(), FieldFailure> {
        self.adapter.read(r).map_err(FieldFailure::from_codec)?;
        Ok(())
    }
}

pub(crate) type Project<T, P> = Arc<dyn Fn(&T) -> &P + Send + Sync>;
pub(crate) type ProjectMut<T, P> = Arc<dyn Fn(&mut T) -> &mut P + Send + Sync>;

/// A field declared on an embedded parent `P`, reached from `T`.
pub(crate) struct ProjectedCodec<T, P> {
    pub(crate) inner: Box<dyn FieldCodec<P>>,
    pub(crate) project: Project<T, P>,
    pub(crate) project_mut: ProjectMut<T, P>,
}

impl<T, P> FieldCodec<T> for ProjectedCodec<T, P> {
    fn write_from(&self, obj: &T, w: &mut dyn Write) -> Result<(), FieldFailure> {
        self.inner.write_from((self.project)(obj), w)
    }

    fn read_into(&self, obj: &mut T, r: &mut dyn Read) -> Result<(), FieldFailure> {
        self.inner.read_into((self.project_mut)(obj), r)
    }

    fn read_and_discard(&self, r: &mut dyn Read) -> Result<(), FieldFailure> {
        self.inner.read_and_discard(r)
    }
}
