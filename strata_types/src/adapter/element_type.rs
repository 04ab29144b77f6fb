use derive_more::Display;
use std::any::{self, TypeId};

#[derive(Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[display(fmt = "{}", name)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    pub fn of<E: 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: any::type_name::<E>(),
        }
    }

    pub fn is<E: 'static>(&self) -> bool {
        self.id == TypeId::of::<E>()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
