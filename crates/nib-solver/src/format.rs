//! Type formatting as source text (`java.util.List<java.lang.String>`,
//! `int[]`, ...). Used for issue messages and by the emitter.

use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId};

pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        TypeFormatter { interner }
    }

    pub fn format(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(id, &mut out);
        out
    }

    /// `name(T1, T2)` with formatted parameter types.
    pub fn format_signature(&self, name: &str, params: &[TypeId]) -> String {
        let params: Vec<String> = params.iter().map(|&p| self.format(p)).collect();
        format!("{name}({})", params.join(", "))
    }

    fn write_type(&self, id: TypeId, out: &mut String) {
        match self.interner.lookup(id) {
            None => out.push_str("<unknown>"),
            Some(TypeData::Void) => out.push_str("void"),
            Some(TypeData::Primitive(kind)) => out.push_str(kind.keyword()),
            Some(TypeData::Declared { name, args }) => {
                out.push_str(self.interner.resolve_atom(*name));
                if !args.is_empty() {
                    out.push('<');
                    for (i, &arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(arg, out);
                    }
                    out.push('>');
                }
            }
            Some(TypeData::Array(element)) => {
                self.write_type(*element, out);
                out.push_str("[]");
            }
            Some(TypeData::TypeParameter(name)) => {
                out.push_str(self.interner.resolve_atom(*name));
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
