//! Type descriptors.

use nib_common::Atom;
use serde::Serialize;
use smallvec::SmallVec;

/// Handle to an interned type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const VOID: TypeId = TypeId(0);
    pub const BOOLEAN: TypeId = TypeId(1);
    pub const BYTE: TypeId = TypeId(2);
    pub const SHORT: TypeId = TypeId(3);
    pub const CHAR: TypeId = TypeId(4);
    pub const INT: TypeId = TypeId(5);
    pub const LONG: TypeId = TypeId(6);
    pub const FLOAT: TypeId = TypeId(7);
    pub const DOUBLE: TypeId = TypeId(8);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 9;

    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

/// The primitive types and their fixed box classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Char,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Fully-qualified name of the box class.
    pub const fn box_class(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "java.lang.Boolean",
            PrimitiveKind::Byte => "java.lang.Byte",
            PrimitiveKind::Short => "java.lang.Short",
            PrimitiveKind::Char => "java.lang.Character",
            PrimitiveKind::Int => "java.lang.Integer",
            PrimitiveKind::Long => "java.lang.Long",
            PrimitiveKind::Float => "java.lang.Float",
            PrimitiveKind::Double => "java.lang.Double",
        }
    }

    pub const fn type_id(self) -> TypeId {
        match self {
            PrimitiveKind::Boolean => TypeId::BOOLEAN,
            PrimitiveKind::Byte => TypeId::BYTE,
            PrimitiveKind::Short => TypeId::SHORT,
            PrimitiveKind::Char => TypeId::CHAR,
            PrimitiveKind::Int => TypeId::INT,
            PrimitiveKind::Long => TypeId::LONG,
            PrimitiveKind::Float => TypeId::FLOAT,
            PrimitiveKind::Double => TypeId::DOUBLE,
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    pub fn from_box_class(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.box_class() == name)
    }
}

/// Structural type representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Void,
    Primitive(PrimitiveKind),
    /// A class or interface by qualified name, with type arguments.
    Declared {
        name: Atom,
        args: SmallVec<[TypeId; 2]>,
    },
    Array(TypeId),
    TypeParameter(Atom),
}
