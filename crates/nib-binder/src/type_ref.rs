//! Parser for type strings of the JSON input.
//!
//! ```text
//! type  := name args? ("[" "]")*
//! name  := ident ("." ident)*
//! args  := "<" type ("," type)* ">"
//! ```
//!
//! `void` and the primitive keywords map to intrinsic types. A bare
//! identifier that names an in-scope type parameter becomes a type parameter;
//! every other name is a declared class or interface.

use nib_solver::{PrimitiveKind, TypeId, TypeInterner};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at offset {offset}")]
pub struct TypeRefError {
    pub offset: usize,
    pub reason: &'static str,
}

/// Parse `text` into an interned type. `type_params` are the type parameter
/// names visible at the use site.
pub fn parse_type_ref(
    types: &mut TypeInterner,
    text: &str,
    type_params: &[&str],
) -> Result<TypeId, TypeRefError> {
    let mut parser = TypeRefParser {
        text,
        pos: 0,
        type_params,
    };
    let id = parser.parse_type(types)?;
    parser.skip_whitespace();
    if parser.pos < text.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(id)
}

struct TypeRefParser<'a> {
    text: &'a str,
    pos: usize,
    type_params: &'a [&'a str],
}

impl<'a> TypeRefParser<'a> {
    fn error(&self, reason: &'static str) -> TypeRefError {
        TypeRefError {
            offset: self.pos,
            reason,
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn parse_ident(&mut self) -> Result<&'a str, TypeRefError> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
            _ => return Err(self.error("expected identifier")),
        }
        while let Some(c) = self.peek() {
            if !(c.is_alphanumeric() || c == '_' || c == '$') {
                break;
            }
            self.pos += c.len_utf8();
        }
        Ok(&self.text[start..self.pos])
    }

    fn parse_name(&mut self) -> Result<&'a str, TypeRefError> {
        self.skip_whitespace();
        let start = self.pos;
        self.parse_ident()?;
        while self.eat('.') {
            self.parse_ident()?;
        }
        Ok(&self.text[start..self.pos])
    }

    fn parse_type(&mut self, types: &mut TypeInterner) -> Result<TypeId, TypeRefError> {
        let name = self.parse_name()?;
        let mut id = if self.eat('<') {
            if name == "void" || PrimitiveKind::from_keyword(name).is_some() {
                return Err(self.error("type arguments on a primitive type"));
            }
            let mut args = vec![self.parse_type(types)?];
            while self.eat(',') {
                args.push(self.parse_type(types)?);
            }
            if !self.eat('>') {
                return Err(self.error("expected '>'"));
            }
            types.declared(name, args)
        } else if name == "void" {
            TypeId::VOID
        } else if let Some(kind) = PrimitiveKind::from_keyword(name) {
            kind.type_id()
        } else if self.type_params.contains(&name) {
            types.type_parameter(name)
        } else {
            types.declared(name, Vec::new())
        };

        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            if id == TypeId::VOID {
                return Err(self.error("array of void"));
            }
            id = types.array(id);
        }
        Ok(id)
    }
}
