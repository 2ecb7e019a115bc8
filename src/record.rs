use derive_more::From;
use std::fmt;

///
/// DocumentId
///
/// Closed set of identifier shapes a record may expose.
///
/// ## Purpose
/// `DocumentId` is a *boundary type*:
/// - text-backed identifiers are used verbatim
/// - signed-integer-backed identifiers render as base-10 decimal text
///
/// Any other identifier kind is unrepresentable: there is deliberately no
/// conversion from floating-point or unsigned values, so an unsupported
/// identity field is a compile error at the record definition, not a
/// runtime failure mid-insert.
///

#[derive(Clone, Debug, Eq, From, Hash, PartialEq)]
pub enum DocumentId {
    Text(String),
    Int(i64),
}

impl DocumentId {
    /// Resolve the identifier to its wire form.
    ///
    /// `Int(42)` and `Text("42")` resolve to the same string.
    #[must_use]
    pub fn resolve(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(int) => write!(f, "{int}"),
        }
    }
}

// Narrower signed widths widen losslessly into the i64-backed variant.

impl From<&str> for DocumentId {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i8> for DocumentId {
    fn from(int: i8) -> Self {
        Self::Int(int.into())
    }
}

impl From<i16> for DocumentId {
    fn from(int: i16) -> Self {
        Self::Int(int.into())
    }
}

impl From<i32> for DocumentId {
    fn from(int: i32) -> Self {
        Self::Int(int.into())
    }
}

///
/// Identifiable
///
/// Capability every fixture record must provide: a stable identifier for
/// the document it becomes, expressed as a [`DocumentId`] rather than by
/// structural inspection of the record.
///

pub trait Identifiable {
    fn document_id(&self) -> DocumentId;
}

// One level of indirection is transparent: a collection of references
// normalizes the same way as a collection of owned records.
impl<R: Identifiable + ?Sized> Identifiable for &R {
    fn document_id(&self) -> DocumentId {
        (**self).document_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Numbered {
        id: i32,
    }

    impl Identifiable for Numbered {
        fn document_id(&self) -> DocumentId {
            self.id.into()
        }
    }

    #[test]
    fn text_ids_resolve_verbatim() {
        let id = DocumentId::from("user-7");
        assert_eq!(id.resolve(), "user-7");
    }

    #[test]
    fn int_and_text_forms_resolve_identically() {
        assert_eq!(DocumentId::Int(42).resolve(), DocumentId::from("42").resolve());
    }

    #[test]
    fn narrow_widths_widen_into_int() {
        assert_eq!(DocumentId::from(-3_i8), DocumentId::Int(-3));
        assert_eq!(DocumentId::from(-3_i16), DocumentId::Int(-3));
        assert_eq!(DocumentId::from(-3_i32), DocumentId::Int(-3));
    }

    #[test]
    fn references_delegate_to_the_record() {
        let record = Numbered { id: 9 };
        assert_eq!((&record).document_id(), record.document_id());
        assert_eq!((&&record).document_id(), DocumentId::Int(9));
    }

    proptest! {
        #[test]
        fn int_ids_render_as_decimal_text(id in any::<i64>()) {
            let int_form = DocumentId::Int(id);
            let text_form = DocumentId::Text(id.to_string());
            prop_assert_eq!(int_form.resolve(), id.to_string());
            prop_assert_eq!(int_form.resolve(), text_form.resolve());
        }
    }
}
