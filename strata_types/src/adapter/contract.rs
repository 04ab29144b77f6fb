use crate::adapter::ElementType;
use anyhow::Result;
use std::io::{Read, Write};

pub trait FieldAdapter: Send + Sync + 'static {
    type Value;

    fn write(&self, w: &mut dyn Write, value: &Self::Value) -> Result<()>;
    fn read(&self, r: &mut dyn Read) -> Result<Self::Value>;
}

/// An adapter over a self-contained value type.
pub trait PlainAdapter: FieldAdapter + Sized {
    fn construct() -> Result<Self>;
}

/// An adapter over a parameterized value, whose element type has to be handed in.
pub trait ElementAdapter: FieldAdapter + Sized {
    fn construct(element_type: &ElementType) -> Result<Self>;
}
