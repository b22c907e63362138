use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BaseType {
    Int,
    Char,
    Void,
}

impl BaseType {
    /// Size of a scalar of this base type, in bytes.
    pub fn size(&self) -> i64 {
        match self {
            BaseType::Int => 4,
            BaseType::Char => 1,
            BaseType::Void => 0,
        }
    }
}

/// A declared type: base plus pointer/array/const flags. Array element
/// counts live on the owning declaration, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    pub base: BaseType,
    pub is_pointer: bool,
    pub is_array: bool,
    pub is_const: bool,
}

impl TypeSpec {
    pub fn new(base: BaseType) -> Self {
        Self {
            base,
            is_pointer: false,
            is_array: false,
            is_const: false,
        }
    }

    /// Size of a value of this type. Pointers and decayed arrays are 8 bytes.
    pub fn size(&self) -> i64 {
        if self.is_pointer || self.is_array {
            8
        } else {
            self.base.size()
        }
    }

    /// Size of one element behind a pointer or array of this type.
    pub fn element_size(&self) -> i64 {
        self.base.size()
    }

    /// The type obtained by dereferencing or indexing a value of this type.
    pub fn deref(self) -> TypeSpec {
        TypeSpec {
            is_pointer: false,
            is_array: false,
            ..self
        }
    }

    /// The type of a pointer to a value of this type.
    pub fn pointer_to(self) -> TypeSpec {
        TypeSpec {
            is_pointer: true,
            is_array: false,
            ..self
        }
    }
}
