//! Java container emission.
//!
//! Layout of the generated container:
//!
//! ```text
//! package <package>;
//!
//! public final class <Container> {
//!     public static class Car_impl implements org.x.Car { ... }
//!     public static class Truck_impl extends Car_impl implements org.x.Truck { ... }
//!     public static final class ProviderService implements BeanProviderService { ... }
//! }
//! ```
//!
//! Each implementation class stores only its own properties; inherited ones
//! live in the base implementation it extends. `equals` and `hashCode` go
//! through the interface getters so they see own and inherited properties
//! alike.

use crate::output::{EmitError, EmitOutput, PROVIDER_SERVICE_CLASS, SERVICE_MANIFEST_PATH};
use crate::source_writer::SourceWriter;
use nib_checker::{Accessor, AccessorKind, BeanModelSet, InterfaceModel, Property};
use nib_solver::{TypeCompatibility, TypeData, TypeFormatter, TypeId, TypeInterner};
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use tracing::debug;

/// Fully-qualified name of the generated container class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetClass {
    pub package: String,
    pub class: String,
}

impl TargetClass {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        TargetClass {
            package: package.into(),
            class: class.into(),
        }
    }

    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.class.clone()
        } else {
            format!("{}.{}", self.package, self.class)
        }
    }
}

/// How two values of a property are compared in `equals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Equality {
    Primitive,
    Array,
    Object,
}

pub struct Emitter<'a> {
    types: &'a TypeInterner,
    target: &'a TargetClass,
}

impl<'a> Emitter<'a> {
    pub fn new(types: &'a TypeInterner, target: &'a TargetClass) -> Self {
        Emitter { types, target }
    }

    /// Render the container source and manifest for `beans`.
    pub fn emit(&self, beans: &BeanModelSet) -> Result<EmitOutput, EmitError> {
        check_impl_names(beans)?;

        let mut w = SourceWriter::new();
        w.line("// Generated by nibeans. Do not edit.");
        if !self.target.package.is_empty() {
            w.line(&format!("package {};", self.target.package));
        }
        w.blank_line();
        w.line("import org.nibeans.internal.BeanProvider;");
        w.line("import org.nibeans.internal.BeanProviderRegistry;");
        w.line(&format!("import {PROVIDER_SERVICE_CLASS};"));
        w.blank_line();
        w.open_block(&format!("public final class {}", self.target.class));
        w.blank_line();
        w.line(&format!("private {}() {{", self.target.class));
        w.line("}");

        for model in beans {
            w.blank_line();
            self.emit_impl_class(&mut w, beans, model);
        }

        w.blank_line();
        self.emit_provider_service(&mut w, beans);
        w.close_block();

        let mut source_path: PathBuf = self
            .target
            .package
            .split('.')
            .filter(|part| !part.is_empty())
            .collect();
        source_path.push(format!("{}.java", self.target.class));
        debug!(
            container = %self.target.qualified_name(),
            beans = beans.len(),
            "emitted bean container"
        );
        Ok(EmitOutput {
            source_path,
            source: w.finish(),
            manifest_path: PathBuf::from(SERVICE_MANIFEST_PATH),
            manifest: format!("{}$ProviderService\n", self.target.qualified_name()),
        })
    }

    fn emit_impl_class(&self, w: &mut SourceWriter, beans: &BeanModelSet, model: &InterfaceModel) {
        let mut header = format!("public static class {}", model.impl_class_name());
        if let Some(base) = beans.base_of(model) {
            header.push_str(&format!(" extends {}", base.impl_class_name()));
        }
        header.push_str(&format!(" implements {}", model.qualified_name));
        w.open_block(&header);

        if !model.properties.is_empty() {
            w.blank_line();
            for property in model.properties.values() {
                w.line(&format!(
                    "private {} {};",
                    self.format(property.value_type),
                    field_name(property)
                ));
            }
        }

        for property in model.properties.values() {
            for (kind, accessor) in property.accessors() {
                w.blank_line();
                self.emit_accessor(w, model, property, kind, accessor);
            }
        }

        w.blank_line();
        self.emit_equals(w, beans, model);
        w.blank_line();
        self.emit_hash_code(w, beans, model);
        w.close_block();
    }

    fn emit_accessor(
        &self,
        w: &mut SourceWriter,
        model: &InterfaceModel,
        property: &Property,
        kind: AccessorKind,
        accessor: &Accessor,
    ) {
        let field = field_name(property);
        let ty = self.format(accessor.ty);
        w.line("@Override");
        if kind.is_getter() {
            w.open_block(&format!("public {ty} {}()", accessor.name));
            w.line(&format!("return this.{field};"));
        } else {
            let returns = if accessor.returns_self {
                model.qualified_name.as_str()
            } else {
                "void"
            };
            w.open_block(&format!("public {returns} {}({ty} v)", accessor.name));
            w.line(&format!("this.{field} = v;"));
            if accessor.returns_self {
                w.line("return this;");
            }
        }
        w.close_block();
    }

    fn emit_equals(&self, w: &mut SourceWriter, beans: &BeanModelSet, model: &InterfaceModel) {
        let interface = &model.qualified_name;
        w.line("@Override");
        w.open_block("public boolean equals(Object obj)");
        w.open_block("if (this == obj)");
        w.line("return true;");
        w.close_block();
        w.open_block(&format!("if (!(obj instanceof {interface}))"));
        w.line("return false;");
        w.close_block();

        let properties = beans.all_properties(model);
        if !properties.is_empty() {
            w.line(&format!("{interface} other = ({interface}) obj;"));
        }
        for property in properties {
            let Some(getter) = read_accessor(property) else {
                continue;
            };
            let get = &getter.name;
            let condition = match self.equality(getter.ty) {
                Equality::Primitive => format!("{get}() != other.{get}()"),
                Equality::Array => format!("!java.util.Arrays.equals({get}(), other.{get}())"),
                Equality::Object => format!("!java.util.Objects.equals({get}(), other.{get}())"),
            };
            w.open_block(&format!("if ({condition})"));
            w.line("return false;");
            w.close_block();
        }
        w.line("return true;");
        w.close_block();
    }

    fn emit_hash_code(&self, w: &mut SourceWriter, beans: &BeanModelSet, model: &InterfaceModel) {
        let parts: Vec<String> = beans
            .all_properties(model)
            .into_iter()
            .filter_map(read_accessor)
            .map(|getter| match self.equality(getter.ty) {
                Equality::Array => format!("java.util.Arrays.hashCode({}())", getter.name),
                Equality::Primitive | Equality::Object => format!("{}()", getter.name),
            })
            .collect();
        w.line("@Override");
        w.open_block("public int hashCode()");
        w.line(&format!("return java.util.Objects.hash({});", parts.join(", ")));
        w.close_block();
    }

    fn emit_provider_service(&self, w: &mut SourceWriter, beans: &BeanModelSet) {
        w.open_block("public static final class ProviderService implements BeanProviderService");
        w.line("@Override");
        w.open_block("public void registerProviders(BeanProviderRegistry registry)");
        for model in beans {
            let interface = &model.qualified_name;
            w.open_block(&format!("registry.register(new BeanProvider<{interface}>()"));
            w.line("@Override");
            w.open_block(&format!("public Class<{interface}> getBeanInterface()"));
            w.line(&format!("return {interface}.class;"));
            w.close_block();
            w.line("@Override");
            w.open_block(&format!("public {interface} createInstance()"));
            w.line(&format!("return new {}();", model.impl_class_name()));
            w.close_block();
            w.decrease_indent();
            w.line("});");
        }
        w.close_block();
        w.close_block();
    }

    fn equality(&self, ty: TypeId) -> Equality {
        if self.types.is_primitive(ty) {
            Equality::Primitive
        } else if matches!(self.types.lookup(ty), Some(TypeData::Array(_))) {
            Equality::Array
        } else {
            Equality::Object
        }
    }

    fn format(&self, ty: TypeId) -> String {
        TypeFormatter::new(self.types).format(ty)
    }
}

/// Getter used to read a property in `equals` and `hashCode`.
fn read_accessor(property: &Property) -> Option<&Accessor> {
    property.getter.as_ref().or(property.boolean_getter.as_ref())
}

fn field_name(property: &Property) -> String {
    format!("_{}", property.name)
}

/// Nested implementation classes share one namespace, so two beans with the
/// same simple name cannot both be emitted.
fn check_impl_names(beans: &BeanModelSet) -> Result<(), EmitError> {
    let mut seen: FxHashMap<String, &str> = FxHashMap::default();
    for model in beans {
        let class = model.impl_class_name();
        if let Some(first) = seen.insert(class.clone(), &model.qualified_name) {
            return Err(EmitError::ImplClassClash {
                first: first.to_string(),
                second: model.qualified_name.clone(),
                class,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/emitter_tests.rs"]
mod tests;
