//! Wire format shared by the puzzle client, the document server and
//! collaborating clients.
//!
//! Everything here is plain JSON. Integers keep their wire width; narrowing to
//! grid coordinates happens in `cluegrid-core`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use document::*;

mod document;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed {tag} message: {source}")]
    Message {
        tag: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const fn other(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Across => "Across",
            Self::Down => "Down",
        }
    }
}

/// 0-indexed grid position as it travels between clients.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowCol {
    pub row: u32,
    pub col: u32,
}

/// One cell edit. `letter: null` clears the cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdateData {
    pub cell: RowCol,
    pub letter: Option<char>,
}

impl CellUpdateData {
    pub const fn new(row: u32, col: u32, letter: Option<char>) -> Self {
        Self {
            cell: RowCol { row, col },
            letter,
        }
    }
}

/// Messages exchanged over the collaborator channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum SyncMessage {
    CellUpdate(CellUpdateData),
    /// Active clue of the sender, `null` when nothing is selected.
    ClueIndex(Option<usize>),
    /// Ask peers to replay every filled cell.
    RequestAllCells,
}

impl SyncMessage {
    const TAGS: [&'static str; 3] = ["cell_update", "clue_index", "request_all_cells"];
}

/// Decoded inbound socket frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Inbound {
    Sync(SyncMessage),
    /// Valid JSON carrying no known tag.
    Other(Value),
}

/// Decodes a text frame from the collaborator channel.
///
/// Frames tagged with a known message type must match that type's shape;
/// anything else that parses as JSON is passed through untouched.
pub fn decode_inbound(text: &str) -> Result<Inbound> {
    let value: Value = serde_json::from_str(text)?;

    let tag = value.get("type").and_then(Value::as_str);
    match tag {
        Some(tag) if SyncMessage::TAGS.contains(&tag) => {
            let tag = tag.to_owned();
            serde_json::from_value(value)
                .map(Inbound::Sync)
                .map_err(|source| ProtocolError::Message { tag, source })
        }
        _ => Ok(Inbound::Other(value)),
    }
}

pub fn encode(message: &SyncMessage) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_update_encodes_null_letter() {
        let message = SyncMessage::CellUpdate(CellUpdateData::new(2, 3, None));

        let text = encode(&message).unwrap();

        assert_eq!(
            text,
            r#"{"type":"cell_update","data":{"cell":{"row":2,"col":3},"letter":null}}"#
        );
    }

    #[test]
    fn decode_inbound_reads_cell_update() {
        let text = r#"{"type":"cell_update","data":{"cell":{"row":0,"col":4},"letter":"Q"}}"#;

        let inbound = decode_inbound(text).unwrap();

        assert_eq!(
            inbound,
            Inbound::Sync(SyncMessage::CellUpdate(CellUpdateData::new(0, 4, Some('Q'))))
        );
    }

    #[test]
    fn decode_inbound_reads_null_clue_index() {
        let inbound = decode_inbound(r#"{"type":"clue_index","data":null}"#).unwrap();

        assert_eq!(inbound, Inbound::Sync(SyncMessage::ClueIndex(None)));
    }

    #[test]
    fn decode_inbound_reads_request_all_cells_without_data() {
        let inbound = decode_inbound(r#"{"type":"request_all_cells"}"#).unwrap();

        assert_eq!(inbound, Inbound::Sync(SyncMessage::RequestAllCells));
    }

    #[test]
    fn decode_inbound_passes_unknown_tags_through() {
        let inbound = decode_inbound(r#"{"type":"presence","data":{"peers":3}}"#).unwrap();

        let Inbound::Other(value) = inbound else {
            panic!("expected pass-through, got {inbound:?}");
        };
        assert_eq!(value["data"]["peers"], 3);
    }

    #[test]
    fn decode_inbound_rejects_known_tag_with_wrong_shape() {
        let err = decode_inbound(r#"{"type":"cell_update","data":{"letter":"AB"}}"#).unwrap_err();

        assert!(matches!(err, ProtocolError::Message { ref tag, .. } if tag == "cell_update"));
    }

    #[test]
    fn decode_inbound_rejects_non_json() {
        assert!(matches!(
            decode_inbound("not json"),
            Err(ProtocolError::Json(_))
        ));
    }

    #[test]
    fn direction_other_flips() {
        assert_eq!(Direction::Across.other(), Direction::Down);
        assert_eq!(Direction::Down.other(), Direction::Across);
    }
}
