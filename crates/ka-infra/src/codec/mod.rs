//! Line-delimited JSON framing for bridge events
//! 桥接事件的按行 JSON 编解码
//!
//! One event per line. Blank lines are not frames.

use ka_core::event::BridgeEvent;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed bridge event frame: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode bridge event {event}: {source}")]
    Encode {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode one line. Returns `Ok(None)` for blank lines.
pub fn decode_line(line: &str) -> Result<Option<BridgeEvent>, CodecError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| CodecError::Malformed { source })
}

/// Encode one event as a single line, newline included.
pub fn encode_line(event: &BridgeEvent) -> Result<String, CodecError> {
    let mut line = serde_json::to_string(event).map_err(|source| CodecError::Encode {
        event: event.name(),
        source,
    })?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ka_core::sheet::{AccessorySheetBuilder, UserInfoField};

    #[test]
    fn decodes_tagged_frames() {
        let event =
            decode_line(r#"{"type":"GenerationStatusChanged","available":false}"#).unwrap();

        assert_eq!(
            event,
            Some(BridgeEvent::GenerationStatusChanged { available: false })
        );
        assert_eq!(
            decode_line("  {\"type\":\"Destroy\"}\r").unwrap(),
            Some(BridgeEvent::Destroy)
        );
    }

    #[test]
    fn decodes_sheet_with_missing_optional_lists() {
        let event = decode_line(r#"{"type":"ItemsAvailable","sheet":{"title":"Saved"}}"#)
            .unwrap()
            .unwrap();

        assert_eq!(
            event,
            BridgeEvent::ItemsAvailable {
                sheet: AccessorySheetBuilder::new("Saved").build()
            }
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(decode_line("").unwrap().is_none());
        assert!(decode_line("   \t").unwrap().is_none());
    }

    #[test]
    fn malformed_frames_are_errors() {
        assert!(matches!(
            decode_line("{not json"),
            Err(CodecError::Malformed { .. })
        ));
        assert!(matches!(
            decode_line(r#"{"type":"Explode"}"#),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn encoded_frame_is_one_line() {
        let sheet = AccessorySheetBuilder::new("example.com")
            .with_user_info(vec![UserInfoField::new("alice", "alice", false, true)])
            .build();
        let event = BridgeEvent::ItemsAvailable { sheet };

        let line = encode_line(&event).unwrap();

        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        assert_eq!(decode_line(&line).unwrap(), Some(event));
    }
}
