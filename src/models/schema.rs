//! Field metadata reflected from declared data-model types.
//!
//! Models are declared with [`define_model!`](crate::define_model), which keeps the
//! field list, the written types, the declared defaults and the doc comments
//! available at runtime through the [`Model`] trait.
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub required: bool,
    pub default: Option<Value>,
    pub description: Option<String>,
}

impl FieldSchema {
    /// `default` is `None` when the field declares no default; such a field is required.
    pub fn new(
        name: &'static str,
        ty: &'static str,
        default: Option<Value>,
        description: Option<String>,
    ) -> Self {
        Self {
            name,
            ty,
            required: default.is_none(),
            // A declared `None` default is reported as null, same as "no default".
            default: default.filter(|v| !v.is_null()),
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSchema {
    pub collection: String,
    pub title: String,
    pub fields: Vec<FieldSchema>,
}

pub trait Model {
    const NAME: &'static str;

    fn fields() -> Vec<FieldSchema>;

    /// Each model maps to a collection named after its lowercased type name.
    fn schema() -> ModelSchema {
        ModelSchema {
            collection: Self::NAME.to_lowercase(),
            title: Self::NAME.to_string(),
            fields: Self::fields(),
        }
    }
}

/// Joins doc comment lines into a single description.
pub fn doc_text(lines: &[&str]) -> Option<String> {
    let text = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!text.is_empty()).then_some(text)
}

/// Declares a data-model struct together with its [`Model`] metadata.
///
/// ```ignore
/// define_model! {
///     pub struct Note {
///         /// Note body
///         pub body: String,
///         pub pinned: bool = false,
///     }
/// }
/// ```
///
/// A field is required unless it declares a default with `= expr`; the default
/// must have the field's type.
#[macro_export]
macro_rules! define_model {
    (@default $ty:ty) => {
        None
    };
    (@default $ty:ty, $default:expr) => {{
        let value: $ty = $default;
        Some(::serde_json::to_value(&value).unwrap_or(::serde_json::Value::Null))
    }};
    (
        $(#[doc = $model_doc:literal])*
        pub struct $name:ident {
            $(
                $(#[doc = $field_doc:literal])*
                pub $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[doc = $model_doc])*
        // Storage code builds these; the service itself only reads their metadata.
        #[allow(dead_code)]
        #[derive(Debug, Clone, ::serde::Serialize)]
        pub struct $name {
            $(
                $(#[doc = $field_doc])*
                pub $field: $ty,
            )*
        }

        impl $crate::models::Model for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> Vec<$crate::models::FieldSchema> {
                vec![$(
                    $crate::models::FieldSchema::new(
                        stringify!($field),
                        stringify!($ty),
                        $crate::define_model!(@default $ty $(, $default)?),
                        $crate::models::schema::doc_text(&[$($field_doc),*]),
                    )
                ),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::define_model! {
        /// Scratch model
        pub struct Sample {
            /// First line
            ///   second line
            pub label: String,
            pub count: u32 = 3,
            pub note: Option<String> = None,
            pub flag: bool,
        }
    }

    #[test]
    fn fields_follow_declaration_order() {
        let names: Vec<_> = Sample::fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["label", "count", "note", "flag"]);
    }

    #[test]
    fn required_exactly_when_no_default() {
        let fields = Sample::fields();
        let required: Vec<_> = fields.iter().map(|f| f.required).collect();
        assert_eq!(required, [true, false, false, true]);

        assert_eq!(fields[0].default, None);
        assert_eq!(fields[1].default, Some(serde_json::json!(3)));
        assert_eq!(fields[2].default, None);
    }

    #[test]
    fn types_and_descriptions_are_kept() {
        let fields = Sample::fields();
        assert_eq!(fields[0].ty, "String");
        assert!(fields[2].ty.contains("Option"));
        assert_eq!(
            fields[0].description.as_deref(),
            Some("First line second line")
        );
        assert_eq!(fields[3].description, None);
    }

    #[test]
    fn schema_uses_lowercased_collection() {
        let schema = Sample::schema();
        assert_eq!(schema.collection, "sample");
        assert_eq!(schema.title, "Sample");
        assert_eq!(schema.fields.len(), 4);
    }

    #[test]
    fn field_serializes_type_key() {
        let value = serde_json::to_value(&Sample::fields()[1]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "count",
                "type": "u32",
                "required": false,
                "default": 3,
                "description": null,
            })
        );
    }

    #[test]
    fn blank_docs_have_no_description() {
        assert_eq!(doc_text(&[]), None);
        assert_eq!(doc_text(&[" ", ""]), None);
    }
}
