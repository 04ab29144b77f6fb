use crate::adapter::{ElementAdapter, ElementType, FieldAdapter, PlainAdapter};
use anyhow::{anyhow, Result};
use std::any;

/// How an adapter gets constructed.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum BindingShape {
    Plain,
    WithElement(ElementType),
}

/// The adapter a field is bound to, and the shape it is constructed in.
pub struct AdapterBinding<A: FieldAdapter> {
    shape: BindingShape,
    factory: fn(&BindingShape) -> Result<A>,
}

impl<A: PlainAdapter> AdapterBinding<A> {
    pub fn plain() -> Self {
        Self {
            shape: BindingShape::Plain,
            factory: |_| A::construct(),
        }
    }
}

impl<A: ElementAdapter> AdapterBinding<A> {
    pub fn with_element<E: 'static>() -> Self {
        Self::with_element_type(ElementType::of::<E>())
    }

    pub fn with_element_type(element_type: ElementType) -> Self {
        Self {
            shape: BindingShape::WithElement(element_type),
            factory: |shape| match shape {
                BindingShape::WithElement(element_type) => A::construct(element_type),
                BindingShape::Plain => Err(anyhow!(
                    "{} requires an element type",
                    any::type_name::<A>()
                )),
            },
        }
    }
}

impl<A: FieldAdapter> AdapterBinding<A> {
    pub fn element_type(&self) -> Option<ElementType> {
        match self.shape {
            BindingShape::Plain => None,
            BindingShape::WithElement(element_type) => Some(element_type),
        }
    }

    pub fn adapter_name(&self) -> &'static str {
        any::type_name::<A>()
    }

    pub fn instantiate(&self) -> Result<A> {
        (self.factory)(&self.shape)
    }
}
