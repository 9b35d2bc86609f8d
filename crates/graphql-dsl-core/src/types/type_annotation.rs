/// Represents the annotated type of a [`Field`](crate::types::Field) or
/// [`Parameter`](crate::types::Parameter): a base type name plus nullability
/// and optional list wrapping.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

impl TypeAnnotation {
    /// A non-null annotation for the given type name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable: false,
        })
    }

    /// A non-null list wrapping the given inner annotation.
    pub fn list_of(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable: false,
        })
    }

    /// Parse an SDL-style type string as written in a `return_type`
    /// override: `"[User]"` becomes a list of `User`, anything else is
    /// taken as a plain type name.
    pub(crate) fn from_type_str(sdl_type: &str, nullable: bool) -> Self {
        let sdl_type = sdl_type.trim();
        if let Some(element) = sdl_type
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Self::List(ListTypeAnnotation {
                inner_type_ref: Box::new(Self::named(element.trim())),
                nullable,
            })
        } else {
            Self::Named(NamedTypeAnnotation {
                name: sdl_type.to_string(),
                nullable,
            })
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// The innermost type name of this annotation (the element name for
    /// lists).
    pub fn graphql_type_name(&self) -> &str {
        match self {
            Self::List(annot) => annot.inner_type_ref.graphql_type_name(),
            Self::Named(annot) => annot.name.as_str(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// A list whose element is itself a list. Only zero or one level of
    /// listing is supported; builders reject annotations for which this
    /// returns true.
    pub fn is_nested_list(&self) -> bool {
        match self {
            Self::List(annot) => annot.inner_type_ref.is_list(),
            Self::Named(_) => false,
        }
    }

    /// Indicates if this annotation is nullable at its outermost level
    /// (the list itself for list annotations).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable,
            Self::Named(annot) => annot.nullable,
        }
    }

    /// The same annotation with its outermost nullability replaced.
    pub fn with_nullable(self, nullable: bool) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation {
                nullable,
                ..annot
            }),
            Self::Named(annot) => Self::Named(NamedTypeAnnotation {
                nullable,
                ..annot
            }),
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_ref.graphql_type_name(),
                if list_annot.nullable { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.name,
                if named_annot.nullable { "" } else { "!" },
            ),
        }
    }
}

impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}

/// A plain named type occurrence, e.g. `Int!` or `User`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) name: String,
    pub(crate) nullable: bool,
}
impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

/// A list type occurrence, e.g. `[Int]!`. The list's own nullability is
/// independent of its element's.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_ref: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
