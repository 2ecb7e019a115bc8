use crate::{error::NormalizeError, record::Identifiable};
use serde::Serialize;
use serde_json::Value;

///
/// Document
///
/// Wire-ready form of one record: a resolved string identifier plus the
/// record's full field set serialized as a JSON object.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    id: String,
    body: Value,
}

impl Document {
    /// Normalize a single record into its document form.
    ///
    /// The identifier is resolved through the record's [`Identifiable`]
    /// capability; the body is the record serialized as-is. A record whose
    /// serialized form is not a JSON object cannot be stored as a field
    /// set and is a normalization error.
    pub fn from_record<R>(record: &R) -> Result<Self, NormalizeError>
    where
        R: Identifiable + Serialize,
    {
        let id = record.document_id().resolve();

        let body = serde_json::to_value(record).map_err(|source| NormalizeError::Serialize {
            id: id.clone(),
            source,
        })?;
        if !body.is_object() {
            return Err(NormalizeError::UnsupportedBody {
                id,
                kind: json_kind(&body),
            });
        }

        Ok(Self { id, body })
    }

    /// Return the resolved identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Return the serialized field set.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Decompose into identifier and body.
    #[must_use]
    pub fn into_parts(self) -> (String, Value) {
        (self.id, self.body)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DocumentId;
    use serde_json::json;

    #[derive(Serialize)]
    struct Product {
        id: i64,
        name: String,
    }

    impl Identifiable for Product {
        fn document_id(&self) -> DocumentId {
            self.id.into()
        }
    }

    // Serializes to a bare string, which can never be a field set.
    #[derive(Serialize)]
    #[serde(transparent)]
    struct Tag(String);

    impl Identifiable for Tag {
        fn document_id(&self) -> DocumentId {
            self.0.as_str().into()
        }
    }

    #[test]
    fn records_normalize_to_id_and_field_set() {
        let product = Product {
            id: 42,
            name: "A".to_string(),
        };

        let doc = Document::from_record(&product).expect("product should normalize");
        assert_eq!(doc.id(), "42");
        assert_eq!(doc.body(), &json!({ "id": 42, "name": "A" }));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        let tag = Tag("alpha".to_string());

        let err = Document::from_record(&tag).expect_err("bare string body should be rejected");
        match err {
            NormalizeError::UnsupportedBody { id, kind } => {
                assert_eq!(id, "alpha");
                assert_eq!(kind, "string");
            }
            other => panic!("expected UnsupportedBody, got {other:?}"),
        }
    }

    #[test]
    fn referenced_records_normalize_like_owned_ones() {
        let product = Product {
            id: 7,
            name: "B".to_string(),
        };

        let owned = Document::from_record(&product).expect("owned record should normalize");
        let referenced = Document::from_record(&&product).expect("referenced record should normalize");
        assert_eq!(owned, referenced);
    }

    #[test]
    fn into_parts_returns_both_halves() {
        let product = Product {
            id: 1,
            name: "C".to_string(),
        };

        let (id, body) = Document::from_record(&product)
            .expect("product should normalize")
            .into_parts();
        assert_eq!(id, "1");
        assert_eq!(body["name"], "C");
    }
}
