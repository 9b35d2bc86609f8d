/// Represents a declared enum type. Values keep the declaration order and
/// literal spelling of the underlying Rust enum's variants.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The SDL block for this enum.
    pub(crate) fn sdl_block(&self) -> String {
        let mut out = String::new();
        if let Some(description) = &self.description {
            out.push_str("# ");
            out.push_str(description);
            out.push('\n');
        }
        out.push_str("enum ");
        out.push_str(&self.name);
        out.push_str(" {");
        for value in &self.values {
            out.push_str("\n    ");
            out.push_str(value);
        }
        out.push_str("\n}");
        out
    }
}
