use crate::types::EnumType;

/// Mutable configuration for one enum declaration. The value list is
/// auto-populated from the Rust enum's variants and is not editable; the
/// block may override the name or attach a description.
#[derive(Debug)]
pub struct EnumTypeBuilder {
    description: Option<String>,
    name: String,
    values: Vec<String>,
}
impl EnumTypeBuilder {
    pub(crate) fn new(name: String, values: Vec<String>) -> Self {
        Self {
            description: None,
            name,
            values,
        }
    }

    /// Overrides the inferred enum name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn build(self) -> EnumType {
        EnumType {
            description: self.description,
            name: self.name,
            values: self.values,
        }
    }
}
