//! Edit notifications delivered by the host input surface.
//!
//! The host captures each edit from its platform (a textarea `input` event,
//! a terminal widget, an injected test stream) and forwards the buffer value
//! it observed together with a single edit-kind tag. The four kinds are a
//! closed set so reconciliation rules stay exhaustively matched.
//!
//! Events are serializable; the wire names are the DOM `inputType` spellings,
//! so a recorded browser event stream replays without translation.

use serde::{Deserialize, Serialize};

/// Kind of a single edit, tagged by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// Plain character insertion at the end of the buffer
    #[serde(rename = "insertText")]
    InsertText,
    /// Line-break insertion; the inserted character is `\n`
    #[serde(rename = "insertLineBreak")]
    InsertLineBreak,
    /// Input-method composition update; the value is the IME's latest full
    /// reinterpretation of the trailing uncommitted span
    #[serde(rename = "insertCompositionText")]
    InsertCompositionText,
    /// Backward deletion at the end of the buffer
    #[serde(rename = "deleteContentBackward")]
    DeleteContentBackward,
}

impl EditKind {
    /// Whether this edit removes trailing content.
    pub fn is_delete(&self) -> bool {
        matches!(self, EditKind::DeleteContentBackward)
    }

    /// Whether this edit is part of an in-progress composition.
    pub fn is_composition(&self) -> bool {
        matches!(self, EditKind::InsertCompositionText)
    }

    /// The DOM `inputType` spelling of this kind.
    pub fn as_dom_input_type(&self) -> &'static str {
        match self {
            EditKind::InsertText => "insertText",
            EditKind::InsertLineBreak => "insertLineBreak",
            EditKind::InsertCompositionText => "insertCompositionText",
            EditKind::DeleteContentBackward => "deleteContentBackward",
        }
    }

    /// Parse a DOM `inputType` spelling. Returns `None` for tags outside the
    /// recognized set; hosts validate upstream.
    pub fn from_dom_input_type(tag: &str) -> Option<Self> {
        match tag {
            "insertText" => Some(EditKind::InsertText),
            "insertLineBreak" => Some(EditKind::InsertLineBreak),
            "insertCompositionText" => Some(EditKind::InsertCompositionText),
            "deleteContentBackward" => Some(EditKind::DeleteContentBackward),
            _ => None,
        }
    }
}

/// One edit notification: the buffer value the host observed immediately
/// after the edit, plus the edit kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEvent {
    /// Buffer content after the edit, as seen by the host
    pub value: String,
    /// Edit kind tag captured from the input surface
    pub kind: EditKind,
}

impl EditEvent {
    pub fn new<T: Into<String>>(value: T, kind: EditKind) -> Self {
        EditEvent {
            value: value.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_input_type_round_trip() {
        for kind in [
            EditKind::InsertText,
            EditKind::InsertLineBreak,
            EditKind::InsertCompositionText,
            EditKind::DeleteContentBackward,
        ] {
            assert_eq!(
                EditKind::from_dom_input_type(kind.as_dom_input_type()),
                Some(kind)
            );
        }
        assert_eq!(EditKind::from_dom_input_type("insertFromPaste"), None);
    }

    #[test]
    fn test_wire_names_match_dom() {
        let event = EditEvent::new("He", EditKind::InsertText);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, "{\"value\":\"He\",\"kind\":\"insertText\"}");

        let composed: EditEvent =
            serde_json::from_str("{\"value\":\" \",\"kind\":\"insertCompositionText\"}").unwrap();
        assert_eq!(composed.kind, EditKind::InsertCompositionText);
        assert_eq!(composed.value, " ");
    }
}
