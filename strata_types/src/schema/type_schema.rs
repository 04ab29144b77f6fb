use crate::adapter::FieldAdapter;
use crate::schema::field::{PendingField, Resolved};
use crate::schema::{FieldDecl, FieldSchema};
use crate::{FormatVersion, StrataError, StrataResult, DEFAULT_VERSION};
use std::any;
use std::fmt;
use std::sync::Arc;


/// The resolved, ordered description of a type's persisted fields,
/// plus the format version its current code writes.
pub struct TypeSchema<T> {
    owner: &'static str,
    current_version: FormatVersion,
    fields: Vec<FieldSchema<T>>,
}

impl<T: 'static> TypeSchema<T> {
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder {
            current_version: DEFAULT_VERSION,
            pending: vec![],
        }
    }
}

impl<T> TypeSchema<T> {
    /// The name of the type this schema describes.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn current_version(&self) -> FormatVersion {
        self.current_version
    }

    /// In the order they are written and read.
    pub fn fields(&self) -> &[FieldSchema<T>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema<T>> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

impl<T> fmt::Debug for TypeSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSchema")
            .field("owner", &self.owner)
            .field("current_version", &self.current_version)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Collects a type's declarations. Fields are persisted in the order they are added.
pub struct SchemaBuilder<T> {
    current_version: FormatVersion,
    pending: Vec<Box<dyn PendingField<T>>>,
}

impl<T: 'static> SchemaBuilder<T> {
    pub fn version(mut self, version: u32) -> Self {
        self.current_version = FormatVersion::new(version);
        self
    }

    pub fn field<A>(mut self, decl: FieldDecl<T, A>) -> Self
    where
        A: FieldAdapter,
        A::Value: 'static,
    {
        self.pending.push(Box::new(decl));
        self
    }

    /// Appends, at this position, every field of an embedded parent `P`.
    ///
    /// The parent's windows are kept; its version is not. All fields of `T`,
    /// inherited or not, are governed by `T`'s own version.
    pub fn inherit<P: 'static>(
        mut self,
        parent: TypeSchema<P>,
        project: impl Fn(&T) -> &P + Send + Sync + 'static,
        project_mut: impl Fn(&mut T) -> &mut P + Send + Sync + 'static,
    ) -> Self {
        let project: Arc<dyn Fn(&T) -> &P + Send + Sync> = Arc::new(project);
        let project_mut: Arc<dyn Fn(&mut T) -> &mut P + Send + Sync> = Arc::new(project_mut);
        for field in parent.fields {
            let field = field.project(Arc::clone(&project), Arc::clone(&project_mut));
            self.pending.push(Box::new(Resolved(field)));
        }
        self
    }

    /// Validates the declarations and constructs every field's adapter.
    pub fn build(self) -> StrataResult<TypeSchema<T>> {
        let owner = any::type_name::<T>();
        if *self.current_version == 0 {
            return Err(StrataError::InvalidSchema {
                owner,
                reason: String::from("version must be positive"),
            });
        }

        let mut fields = Vec::with_capacity(self.pending.len());
        for pending in self.pending {
            fields.push(pending.resolve(owner, self.current_version)?);
        }

        Ok(TypeSchema {
            owner,
            current_version: self.current_version,
            fields,
        })
    }
}
