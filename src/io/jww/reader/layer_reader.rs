//! Layer table decoder.
//!
//! The table directly follows the header stride: exactly
//! `header.layer_count` records of 36 bytes each — flags byte (bit 0 =
//! visible, bit 1 = locked), color byte, line-type byte, one reserved
//! byte, and a 32-byte legacy-text name.
//!
//! A slot that fails to decode never aborts the read, independent of
//! strict mode: the default record is substituted for that slot, the
//! cursor is repositioned to the next record boundary, and the loop
//! continues. The result always has exactly `layer_count` entries.

use crate::document::JwwHeader;
use crate::error::Result;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::{Layer, LayerFlags};

use super::super::constants::{LAYER_NAME_LEN, LAYER_RECORD_LEN};
use super::super::cursor::JwwCursor;
use super::super::defaults;

/// Decode the full layer table.
pub fn read_layers(
    cursor: &mut JwwCursor<'_>,
    header: &JwwHeader,
    notifications: &mut NotificationCollection,
) -> Vec<Layer> {
    let count = header.layer_count as usize;
    let table_start = cursor.position();
    let mut layers = Vec::with_capacity(count);

    for number in 0..count {
        let record_start = table_start + number * LAYER_RECORD_LEN;
        match read_layer_record(cursor, number as u8) {
            Ok(layer) => layers.push(layer),
            Err(err) => {
                notifications.notify_at(
                    NotificationType::Recovered,
                    record_start,
                    format!("layer {number}: {err}; default record substituted"),
                );
                layers.push(Layer::default_for(number as u8));
                // Past a bad slot the position is unspecified; restart
                // at the next record boundary
                cursor.set_position(record_start + LAYER_RECORD_LEN);
            }
        }
    }

    layers
}

/// Decode a single 36-byte layer record.
fn read_layer_record(cursor: &mut JwwCursor<'_>, number: u8) -> Result<Layer> {
    let flags = LayerFlags::from_bits_truncate(cursor.read_u8()?);
    let color = cursor.read_u8()?;
    let line_type = cursor.read_u8()?;
    cursor.skip(1)?;
    let stored_name = cursor.read_text(LAYER_NAME_LEN)?;

    let mut layer = Layer::new(number, defaults::layer_name(&stored_name, number)).with_flags(flags);
    layer.color = color;
    layer.line_type = line_type;
    Ok(layer)
}
