//! Symbol metadata types supplied by the host.
//!
//! These are a read-only snapshot of resolved compiler symbols: component
//! types, their declared properties, the properties' declared types, and the
//! annotations on each. Extraction never mutates them.

use std::sync::Arc;

use indexmap::IndexMap;

// ============================================================================
// ACCESSIBILITY & TYPE CLASSIFICATION
// ============================================================================

/// Declared accessibility of a type or accessor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        self == Accessibility::Public
    }
}

/// Special classification of a type symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    /// The built-in string type.
    String,
    /// Other built-in scalar types (`int`, `bool`, ...).
    Primitive,
}

/// A reference to a type as seen from a property declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    /// Full display name, e.g. `System.Collections.Generic.Dictionary<string, int>`.
    pub name: Arc<str>,
    pub kind: TypeKind,
    /// Identity of the generic definition this type was constructed from.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub constructed_from: Option<Arc<str>>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub type_arguments: Vec<TypeRef>,
    /// Every interface the type implements, flattened by the host.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub interfaces: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(name: impl Into<Arc<str>>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constructed_from: None,
            type_arguments: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// The built-in string type.
    pub fn string() -> Self {
        Self::new("string", TypeKind::String)
    }

    /// A built-in scalar type such as `int`.
    pub fn primitive(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, TypeKind::Primitive)
    }

    /// Mark this type as a construction of the generic definition `definition`.
    pub fn constructed(
        mut self,
        definition: impl Into<Arc<str>>,
        arguments: impl IntoIterator<Item = TypeRef>,
    ) -> Self {
        self.constructed_from = Some(definition.into());
        self.type_arguments = arguments.into_iter().collect();
        self
    }

    /// Add an implemented interface.
    pub fn implementing(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn is_string(&self) -> bool {
        self.kind == TypeKind::String
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    /// Whether this type is a construction of `definition` with `arity` type arguments.
    pub fn is_constructed_from(&self, definition: &str, arity: usize) -> bool {
        self.constructed_from.as_deref() == Some(definition) && self.type_arguments.len() == arity
    }
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

/// A constant argument value of an annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(Arc<str>),
    /// A `typeof(...)` argument, by qualified name.
    Type(Arc<str>),
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub fn str(value: impl Into<Arc<str>>) -> Self {
        AnnotationValue::Str(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnnotationValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AnnotationValue]> {
        match self {
            AnnotationValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AnnotationValue::Null)
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        AnnotationValue::Str(Arc::from(value))
    }
}

impl From<i64> for AnnotationValue {
    fn from(value: i64) -> Self {
        AnnotationValue::Int(value)
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        AnnotationValue::Bool(value)
    }
}

/// The class of an annotation, as far as the host could resolve it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationClass {
    /// Fully-qualified identity of the annotation class.
    Resolved(Arc<str>),
    /// The class symbol could not be resolved; only the written name is known.
    Unresolved(Arc<str>),
}

/// An annotation instance applied to a type or property.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub class: AnnotationClass,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub positional: Vec<AnnotationValue>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub named: IndexMap<Arc<str>, AnnotationValue>,
}

impl Annotation {
    /// Create an annotation of a resolved class with no arguments.
    pub fn new(kind: impl Into<Arc<str>>) -> Self {
        Self {
            class: AnnotationClass::Resolved(kind.into()),
            positional: Vec::new(),
            named: IndexMap::new(),
        }
    }

    /// Create an annotation whose class the host failed to resolve.
    pub fn unresolved(written_name: impl Into<Arc<str>>) -> Self {
        Self {
            class: AnnotationClass::Unresolved(written_name.into()),
            positional: Vec::new(),
            named: IndexMap::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<AnnotationValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument.
    pub fn named(mut self, key: impl Into<Arc<str>>, value: impl Into<AnnotationValue>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// Whether this annotation is of the given kind (by fully-qualified identity).
    pub fn is_kind(&self, kind: &str) -> bool {
        matches!(&self.class, AnnotationClass::Resolved(k) if k.as_ref() == kind)
    }

    /// Positional argument at `index`.
    pub fn positional(&self, index: usize) -> Option<&AnnotationValue> {
        self.positional.get(index)
    }

    /// Named argument by key (exact, case-sensitive).
    pub fn named_arg(&self, key: &str) -> Option<&AnnotationValue> {
        self.named.get(key)
    }
}

// ============================================================================
// MEMBERS & TYPES
// ============================================================================

/// A property declared on one level of a component's hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyMember {
    pub name: Arc<str>,
    pub ty: TypeRef,
    /// Accessibility of the getter; `None` when there is no getter.
    pub getter: Option<Accessibility>,
    /// Accessibility of the setter; `None` when there is no setter.
    pub setter: Option<Accessibility>,
    /// Number of index parameters (non-zero for indexers).
    #[cfg_attr(feature = "interchange", serde(default))]
    pub parameter_count: usize,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub annotations: Vec<Annotation>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub documentation: Option<Arc<str>>,
}

impl PropertyMember {
    /// A public read/write property.
    pub fn new(name: impl Into<Arc<str>>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            getter: Some(Accessibility::Public),
            setter: Some(Accessibility::Public),
            parameter_count: 0,
            annotations: Vec::new(),
            documentation: None,
        }
    }

    /// Drop the setter, making the property read-only.
    pub fn read_only(mut self) -> Self {
        self.setter = None;
        self
    }

    pub fn with_getter(mut self, getter: Option<Accessibility>) -> Self {
        self.getter = getter;
        self
    }

    pub fn with_setter(mut self, setter: Option<Accessibility>) -> Self {
        self.setter = setter;
        self
    }

    pub fn with_parameters(mut self, count: usize) -> Self {
        self.parameter_count = count;
        self
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn documented(mut self, text: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(text.into());
        self
    }

    pub fn has_public_getter(&self) -> bool {
        self.getter.is_some_and(Accessibility::is_public)
    }

    pub fn has_public_setter(&self) -> bool {
        self.setter.is_some_and(Accessibility::is_public)
    }
}

/// A compiled type that may surface as a custom markup element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentType {
    /// Fully-qualified name, e.g. `App.Widgets.AutoCompleteBoxComponent`.
    pub qualified_name: Arc<str>,
    /// Simple name, e.g. `AutoCompleteBoxComponent`.
    pub name: Arc<str>,
    pub namespace: Arc<str>,
    pub assembly: Arc<str>,
    /// Qualified name of the direct base type, resolved through the provider.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub base_type: Option<Arc<str>>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub accessibility: Accessibility,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub is_abstract: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub is_generic: bool,
    /// Qualified names of every implemented interface.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub interfaces: Vec<Arc<str>>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub annotations: Vec<Annotation>,
    /// Properties declared on this level only, in declaration order.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub members: Vec<PropertyMember>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub documentation: Option<Arc<str>>,
}

impl ComponentType {
    /// Create a public, concrete type in `namespace` with no members.
    pub fn new(namespace: &str, name: &str, assembly: &str) -> Self {
        let qualified_name: Arc<str> = if namespace.is_empty() {
            Arc::from(name)
        } else {
            Arc::from(format!("{}.{}", namespace, name))
        };
        Self {
            qualified_name,
            name: Arc::from(name),
            namespace: Arc::from(namespace),
            assembly: Arc::from(assembly),
            base_type: None,
            accessibility: Accessibility::Public,
            is_abstract: false,
            is_generic: false,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            members: Vec::new(),
            documentation: None,
        }
    }

    pub fn with_base(mut self, base: impl Into<Arc<str>>) -> Self {
        self.base_type = Some(base.into());
        self
    }

    pub fn implementing(mut self, interface: impl Into<Arc<str>>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_member(mut self, member: PropertyMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn documented(mut self, text: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(text.into());
        self
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i.as_ref() == interface)
    }
}
