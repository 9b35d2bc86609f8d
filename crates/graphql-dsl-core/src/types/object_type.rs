use crate::data_fetcher::DataFetcherBinding;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents a declared object type: its auto-derived fields (from the
/// Rust type's member list), any explicitly-added fields, and the data
/// fetchers registered against its field names.
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(crate) added_fields: IndexMap<String, Field>,
    pub(crate) data_fetchers: IndexMap<String, DataFetcherBinding>,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl ObjectType {
    /// Fields explicitly appended with `add_field`, in registration order.
    pub fn added_fields(&self) -> &IndexMap<String, Field> {
        &self.added_fields
    }

    /// Every field of this type: auto-derived members first (declaration
    /// order), explicitly-added fields after.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().chain(self.added_fields.values())
    }

    /// Data fetchers keyed by field name. Keys are not validated against
    /// the field maps.
    pub fn data_fetchers(&self) -> &IndexMap<String, DataFetcherBinding> {
        &self.data_fetchers
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Looks a field up by name in either group.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name).or_else(|| self.added_fields.get(name))
    }

    /// The auto-derived member fields, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The SDL block for this type. Within each group, field lines are
    /// ordered by ascending name; the two groups are separated by a blank
    /// line when both are non-empty.
    pub(crate) fn sdl_block(&self) -> String {
        let mut out = String::new();
        if let Some(description) = &self.description {
            out.push_str("# ");
            out.push_str(description);
            out.push('\n');
        }
        out.push_str("type ");
        out.push_str(&self.name);
        out.push_str(" {");
        for field in sorted_by_name(self.fields.values()) {
            out.push('\n');
            out.push_str(&field.sdl_lines());
        }
        if !self.fields.is_empty() && !self.added_fields.is_empty() {
            out.push('\n');
        }
        for field in sorted_by_name(self.added_fields.values()) {
            out.push('\n');
            out.push_str(&field.sdl_lines());
        }
        out.push_str("\n}");
        out
    }
}

/// Render-time ordering only: the underlying maps and sequences keep
/// declaration order. The sort is stable, so same-named fields keep their
/// relative order.
pub(crate) fn sorted_by_name<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Vec<&'a Field> {
    let mut sorted: Vec<&Field> = fields.into_iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}
