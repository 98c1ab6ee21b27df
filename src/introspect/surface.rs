// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptors of a type's configuration surface.
//!
//! Without runtime reflection, a configuration-holding type describes its declared
//! fields explicitly, in declaration order, through [`ConfigSurface::builder`]. The
//! printer then pairs `_KEY`/`_DEFAULT` and `_PARAMETER`/`_CLASS` fields purely by
//! name, exactly as it would if it had discovered them itself.

use crate::domain::{SizeInBytes, TimeDuration, TimeUnit};
use std::path::{Path, PathBuf};

/// Returns the name of `T` with every module path removed.
///
/// `alloc::string::String` becomes `String` and
/// `core::option::Option<std::path::PathBuf>` becomes `Option<PathBuf>`.
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            short.push_str(segment.rsplit("::").next().unwrap_or(""));
            segment.clear();
            short.push(c);
        }
    }
    short.push_str(segment.rsplit("::").next().unwrap_or(""));
    short
}

/// A value that can appear in a configuration dump.
pub trait Documented {
    /// The type name shown next to a default value.
    fn type_label(&self) -> String {
        short_type_name::<Self>()
    }

    /// The value as it should be printed.
    fn render(&self) -> String;
}

macro_rules! documented_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Documented for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

documented_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, SizeInBytes, TimeDuration, TimeUnit,
);

impl Documented for Path {
    fn render(&self) -> String {
        self.display().to_string()
    }
}

impl Documented for PathBuf {
    fn render(&self) -> String {
        self.display().to_string()
    }
}

/// The rendered value of a field together with its type label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValue {
    type_label: String,
    rendered: String,
}

impl FieldValue {
    /// Captures `value`.
    pub fn of<V: Documented + ?Sized>(value: &V) -> Self {
        Self {
            type_label: value.type_label(),
            rendered: value.render(),
        }
    }

    /// A value naming the type `T`, as held by `_CLASS` fields.
    pub fn type_of<T: ?Sized>() -> Self {
        Self {
            type_label: "type".to_string(),
            rendered: std::any::type_name::<T>().to_string(),
        }
    }

    /// Returns the type label.
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    /// Returns the rendered value.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

/// Whether a field belongs to the type or to its instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldScope {
    /// Shared by the type; the only kind that documents configuration.
    Static,
    /// Per-instance state.
    Instance,
}

/// Whether a field's value can be read from outside the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAccess {
    /// Readable.
    Public,
    /// Not readable.
    Private,
}

/// One declared field.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    name: String,
    scope: FieldScope,
    access: FieldAccess,
    value: FieldValue,
}

impl FieldDescriptor {
    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field scope.
    pub fn scope(&self) -> FieldScope {
        self.scope
    }

    /// Returns the field access.
    pub fn access(&self) -> FieldAccess {
        self.access
    }

    /// Reads the value, if it is a public static field.
    pub fn read(&self) -> Option<&FieldValue> {
        match (self.scope, self.access) {
            (FieldScope::Static, FieldAccess::Public) => Some(&self.value),
            _ => None,
        }
    }
}

/// The declared fields and nested types of one configuration-holding type.
#[derive(Clone, Debug)]
pub struct ConfigSurface {
    name: String,
    fields: Vec<FieldDescriptor>,
    nested: Vec<ConfigSurface>,
}

impl ConfigSurface {
    /// Starts describing the type called `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typedcfg::introspect::ConfigSurface;
    ///
    /// let surface = ConfigSurface::builder("Server")
    ///     .constant("PREFIX", "raft.server")
    ///     .constant("PORT_KEY", "raft.server.port")
    ///     .constant("PORT_DEFAULT", &9000)
    ///     .build();
    ///
    /// assert_eq!(surface.fields().len(), 3);
    /// assert!(surface.field("PORT_DEFAULT").is_some());
    /// ```
    pub fn builder(name: impl Into<String>) -> ConfigSurfaceBuilder {
        ConfigSurfaceBuilder {
            surface: ConfigSurface {
                name: name.into(),
                fields: Vec::new(),
                nested: Vec::new(),
            },
        }
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the nested types, in declaration order.
    pub fn nested(&self) -> &[ConfigSurface] {
        &self.nested
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builder for a [`ConfigSurface`]. Fields are kept in the order they are added.
#[derive(Debug)]
pub struct ConfigSurfaceBuilder {
    surface: ConfigSurface,
}

impl ConfigSurfaceBuilder {
    fn push(mut self, name: &str, scope: FieldScope, access: FieldAccess, value: FieldValue) -> Self {
        self.surface.fields.push(FieldDescriptor {
            name: name.to_string(),
            scope,
            access,
            value,
        });
        self
    }

    /// Declares a public constant.
    pub fn constant<V: Documented + ?Sized>(self, name: &str, value: &V) -> Self {
        self.push(name, FieldScope::Static, FieldAccess::Public, FieldValue::of(value))
    }

    /// Declares a constant whose value cannot be read from outside the type.
    pub fn private_constant<V: Documented + ?Sized>(self, name: &str, value: &V) -> Self {
        self.push(name, FieldScope::Static, FieldAccess::Private, FieldValue::of(value))
    }

    /// Declares a public constant holding the type `T`, typically a `_CLASS` field.
    pub fn type_constant<T: ?Sized>(self, name: &str) -> Self {
        self.push(name, FieldScope::Static, FieldAccess::Public, FieldValue::type_of::<T>())
    }

    /// Declares a per-instance field.
    pub fn instance_field<V: Documented + ?Sized>(self, name: &str, value: &V) -> Self {
        self.push(name, FieldScope::Instance, FieldAccess::Public, FieldValue::of(value))
    }

    /// Declares a nested type.
    pub fn nested(mut self, surface: ConfigSurface) -> Self {
        self.surface.nested.push(surface);
        self
    }

    /// Finishes the description.
    pub fn build(self) -> ConfigSurface {
        self.surface
    }
}

/// A type that can describe its own configuration surface.
///
/// # Examples
///
/// ```rust
/// use typedcfg::introspect::{ConfigSurface, Introspect};
///
/// struct LogConf;
///
/// impl LogConf {
///     const SEGMENT_SIZE_KEY: &'static str = "raft.log.segment.size";
///     const SEGMENT_SIZE_DEFAULT: &'static str = "8MB";
/// }
///
/// impl Introspect for LogConf {
///     fn config_surface() -> ConfigSurface {
///         ConfigSurface::builder("LogConf")
///             .constant("SEGMENT_SIZE_KEY", Self::SEGMENT_SIZE_KEY)
///             .constant("SEGMENT_SIZE_DEFAULT", Self::SEGMENT_SIZE_DEFAULT)
///             .build()
///     }
/// }
///
/// assert_eq!(LogConf::config_surface().name(), "LogConf");
/// ```
pub trait Introspect {
    /// Describes the declared fields and nested types.
    fn config_surface() -> ConfigSurface;
}
