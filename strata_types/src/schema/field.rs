use crate::adapter::{AdapterBinding, ElementType, FieldAdapter};
use crate::schema::access::{Access, BoundCodec, FieldCodec, Project, ProjectMut, ProjectedCodec};
use crate::schema::ValidityWindow;
use crate::{FieldFailure, FormatVersion, StrataError, StrataResult, DEFAULT_SINCE};
use anyhow::Result;
use std::fmt;
use std::io::{Read, Write};

/// A field as declared by its type, before its adapter is constructed.
pub struct FieldDecl<T, A: FieldAdapter> {
    name: &'static str,
    binding: AdapterBinding<A>,
    since: FormatVersion,
    until: Option<FormatVersion>,
    access: Access<T, A::Value>,
}

impl<T, A: FieldAdapter> FieldDecl<T, A> {
    /// Declares a field backed by a struct member.
    pub fn new(
        name: &'static str,
        binding: AdapterBinding<A>,
        get: impl Fn(&T) -> &A::Value + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut A::Value + Send + Sync + 'static,
    ) -> Self {
        let access = Access::Direct {
            get: Box::new(get),
            get_mut: Box::new(get_mut),
        };
        Self::with_access(name, binding, access)
    }

    /// Declares a field reached through the type's own internal accessors.
    pub fn with_accessors(
        name: &'static str,
        binding: AdapterBinding<A>,
        get: impl Fn(&T) -> Result<A::Value> + Send + Sync + 'static,
        set: impl Fn(&mut T, A::Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        let access = Access::Fallible {
            get: Box::new(get),
            set: Box::new(set),
        };
        Self::with_access(name, binding, access)
    }

    fn with_access(
        name: &'static str,
        binding: AdapterBinding<A>,
        access: Access<T, A::Value>,
    ) -> Self {
        Self {
            name,
            binding,
            since: DEFAULT_SINCE,
            until: None,
            access,
        }
    }

    pub fn since(mut self, since: u32) -> Self {
        self.since = FormatVersion::new(since);
        self
    }

    pub fn until(mut self, until: u32) -> Self {
        self.until = Some(FormatVersion::new(until));
        self
    }
}

/// Turns a declaration into a [`FieldSchema`]. Object safe so that a builder can hold
/// declarations over different adapters side by side.
pub(crate) trait PendingField<T> {
    fn resolve(
        self: Box<Self>,
        owner: &'static str,
        current_version: FormatVersion,
    ) -> StrataResult<FieldSchema<T>>;
}

impl<T, A> PendingField<T> for FieldDecl<T, A>
where
    T: 'static,
    A: FieldAdapter,
    A::Value: 'static,
{
    fn resolve(
        self: Box<Self>,
        owner: &'static str,
        current_version: FormatVersion,
    ) -> StrataResult<FieldSchema<T>> {
        let FieldDecl {
            name,
            binding,
            since,
            until,
            access,
        } = *self;

        let window =
            ValidityWindow::new(since, until).map_err(|e| StrataError::InvalidSchema {
                owner,
                reason: format!("field '{}': {}", name, e),
            })?;

        let adapter_name = binding.adapter_name();
        let adapter = binding.instantiate().map_err(|e| StrataError::Resolve {
            field: name,
            owner,
            adapter: adapter_name,
            current_version,
            cause: FieldFailure::Binding(e),
        })?;

        Ok(FieldSchema {
            name,
            adapter_name,
            element_type: binding.element_type(),
            window,
            codec: Box::new(BoundCodec { adapter, access }),
        })
    }
}

/// A field already part of a resolved schema, e.g. one inherited from an embedded parent.
pub(crate) struct Resolved<T>(pub(crate) FieldSchema<T>);

impl<T> PendingField<T> for Resolved<T> {
    fn resolve(self: Box<Self>, _: &'static str, _: FormatVersion) -> StrataResult<FieldSchema<T>> {
        Ok(self.0)
    }
}

/// One persisted field: its name, its constructed adapter, and its validity window.
pub struct FieldSchema<T> {
    name: &'static str,
    adapter_name: &'static str,
    element_type: Option<ElementType>,
    window: ValidityWindow,
    codec: Box<dyn FieldCodec<T>>,
}

impl<T> FieldSchema<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn adapter_name(&self) -> &'static str {
        self.adapter_name
    }

    pub fn element_type(&self) -> Option<ElementType> {
        self.element_type
    }

    pub fn window(&self) -> &ValidityWindow {
        &self.window
    }

    /// Encodes this field's current value off `obj`.
    pub fn write_from(&self, obj: &T, w: &mut dyn Write) -> Result<(), FieldFailure> {
        self.codec.write_from(obj, w)
    }

    /// Decodes one value and assigns it into `obj`.
    pub fn read_into(&self, obj: &mut T, r: &mut dyn Read) -> Result<(), FieldFailure> {
        self.codec.read_into(obj, r)
    }

    /// Decodes one value only to move past it.
    pub fn read_and_discard(&self, r: &mut dyn Read) -> Result<(), FieldFailure> {
        self.codec.read_and_discard(r)
    }

    pub(crate) fn project<C>(
        self,
        project: Project<C, T>,
        project_mut: ProjectMut<C, T>,
    ) -> FieldSchema<C>
    where
        T: 'static,
        C: 'static,
    {
        FieldSchema {
            name: self.name,
            adapter_name: self.adapter_name,
            element_type: self.element_type,
            window: self.window,
            codec: Box::new(ProjectedCodec {
                inner: self.codec,
                project,
                project_mut,
            }),
        }
    }
}

impl<T> fmt::Debug for FieldSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("adapter", &self.adapter_name)
            .field("element_type", &self.element_type)
            .field("window", &self.window)
            .finish()
    }
}
