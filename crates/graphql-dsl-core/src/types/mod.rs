mod enum_type;
mod enum_type_builder;
mod field;
mod field_builder;
mod object_type;
mod object_type_builder;
mod parameter;
mod parameter_builder;
mod scalar_type;
mod scalar_type_builder;
mod type_annotation;

pub use enum_type::EnumType;
pub use enum_type_builder::EnumTypeBuilder;
pub use field::Field;
pub use field_builder::FieldBuilder;
pub use object_type::ObjectType;
pub(crate) use object_type::sorted_by_name;
pub use object_type_builder::ObjectTypeBuilder;
pub use parameter::Parameter;
pub use parameter_builder::ParameterBuilder;
pub use scalar_type::ScalarType;
pub use scalar_type_builder::ScalarTypeBuilder;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;

#[cfg(test)]
mod tests;
