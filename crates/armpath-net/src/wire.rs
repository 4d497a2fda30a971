//! Relay message formats.
//!
//! Publishers send one JSON object per frame, `{"x":pan,"y":tilt,"z":grip,"c":claw}`.
//! The relay rebroadcasts it as a bare comma-joined line, `"pan,tilt,grip,claw"`,
//! with no framing, checksum or version.

use armpath_core::ServoFrame;
use serde::{Deserialize, Serialize};

use crate::error::WireError;

/// Inbound publish payload as sent by the authoring surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishPayload {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub c: i32,
}

impl From<ServoFrame> for PublishPayload {
    fn from(frame: ServoFrame) -> Self {
        Self { x: frame.pan, y: frame.tilt, z: frame.grip, c: frame.claw }
    }
}

impl From<PublishPayload> for ServoFrame {
    fn from(payload: PublishPayload) -> Self {
        Self { pan: payload.x, tilt: payload.y, grip: payload.z, claw: payload.c }
    }
}

pub fn encode_publish(frame: &ServoFrame) -> Result<String, WireError> {
    Ok(serde_json::to_string(&PublishPayload::from(*frame))?)
}

pub fn decode_publish(text: &str) -> Result<ServoFrame, WireError> {
    let payload: PublishPayload = serde_json::from_str(text)?;
    Ok(payload.into())
}

/// Format a frame as the broadcast line.
pub fn format_broadcast(frame: &ServoFrame) -> String {
    format!("{},{},{},{}", frame.pan, frame.tilt, frame.grip, frame.claw)
}

/// Parse a broadcast line. Exactly four integer fields are required.
pub fn parse_broadcast(line: &str) -> Result<ServoFrame, WireError> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() != 4 {
        return Err(WireError::FieldCount(fields.len()));
    }

    let mut values = [0i32; 4];
    for (index, (slot, field)) in values.iter_mut().zip(&fields).enumerate() {
        *slot = field.trim().parse().map_err(|_| WireError::InvalidField {
            index,
            value: field.to_string(),
        })?;
    }

    Ok(ServoFrame { pan: values[0], tilt: values[1], grip: values[2], claw: values[3] })
}

/// Pack a frame into the 4-byte servo packet a controller board reads.
pub fn to_packet(frame: &ServoFrame) -> Result<[u8; 4], WireError> {
    let values = [frame.pan, frame.tilt, frame.grip, frame.claw];
    let mut packet = [0u8; 4];
    for (index, (byte, value)) in packet.iter_mut().zip(values).enumerate() {
        *byte = u8::try_from(value).map_err(|_| WireError::OutOfByteRange { index, value })?;
    }
    Ok(packet)
}
