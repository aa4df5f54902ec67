//! Entity stream decoder.
//!
//! Records share an 8-byte common header — tag, layer, color,
//! line-type, line width (u16 hundredths-mm), group, one reserved byte
//! — followed by a tag-specific payload. Decoding loops over the
//! stream until the buffer runs out or the terminator tag is hit.
//!
//! Dispatch goes through an explicit decode table keyed by the tag
//! constants; each payload decoder is a pure function from cursor
//! state to a finished entity.

use crate::entities::{
    Arc, ArcFlags, BlockInsert, Circle, Dimension, DimensionType, Ellipse, Entity, EntityCommon,
    Hatch, Line, Point, Polyline, PolylineFlags, Solid, Text, TextHorizontalAlignment,
    TextVerticalAlignment,
};
use crate::error::Result;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::Vector2;

use super::super::constants::{
    tags, FONT_NAME_LEN, MIN_RECORD_REMAINING, RECOVERY_SKIP, UNKNOWN_TAG_SKIP,
};
use super::super::cursor::JwwCursor;
use super::super::{defaults, units};
use super::JwwReaderConfiguration;

/// A payload decoder: consumes the tag-specific bytes after the common
/// header and produces the finished entity.
type PayloadDecoder = fn(&mut JwwCursor<'_>, EntityCommon) -> Result<Entity>;

/// The decode table. Returns `None` for tags outside the supported
/// set, which routes the record to the unknown-tag skip.
fn payload_decoder(tag: u8) -> Option<PayloadDecoder> {
    match tag {
        tags::LINE => Some(decode_line),
        tags::CIRCLE => Some(decode_circle),
        tags::ARC => Some(decode_arc),
        tags::TEXT => Some(decode_text),
        tags::ELLIPSE => Some(decode_ellipse),
        tags::DIMENSION => Some(decode_dimension),
        tags::POLYLINE => Some(decode_polyline),
        tags::POINT => Some(decode_point),
        tags::SOLID => Some(decode_solid),
        tags::HATCH => Some(decode_hatch),
        tags::BLOCK => Some(decode_block),
        _ => None,
    }
}

/// Decode the entity stream from the cursor position to the end of the
/// buffer or the terminator tag.
pub fn read_entities(
    cursor: &mut JwwCursor<'_>,
    config: &JwwReaderConfiguration,
    notifications: &mut NotificationCollection,
) -> Result<Vec<Entity>> {
    let mut entities = Vec::new();

    loop {
        if cursor.remaining() <= MIN_RECORD_REMAINING {
            break;
        }
        let record_start = cursor.position();

        let (tag, common) = match read_common_header(cursor) {
            Ok(header) => header,
            Err(err) => {
                recover(cursor, config, notifications, record_start, err)?;
                continue;
            }
        };

        if tag == tags::TERMINATOR {
            break;
        }

        match payload_decoder(tag) {
            Some(decode) => match decode(cursor, common) {
                Ok(entity) => entities.push(entity),
                Err(err) => recover(cursor, config, notifications, record_start, err)?,
            },
            None => {
                // Unknown tags are never fatal: skip their fixed block
                // and resume the tag search
                notifications.notify_at(
                    NotificationType::UnknownTag,
                    record_start,
                    format!("unknown entity tag {tag:#04x}; {UNKNOWN_TAG_SKIP}-byte block skipped"),
                );
                let skip = UNKNOWN_TAG_SKIP.min(cursor.remaining());
                cursor.set_position(cursor.position() + skip);
            }
        }
    }

    Ok(entities)
}

/// Apply the configured recovery policy to a failed record: either
/// resynchronize past it or propagate the error.
fn recover(
    cursor: &mut JwwCursor<'_>,
    config: &JwwReaderConfiguration,
    notifications: &mut NotificationCollection,
    record_start: usize,
    err: crate::error::JwwError,
) -> Result<()> {
    if config.strict_mode || !config.skip_invalid_entities {
        return Err(err);
    }
    notifications.notify_at(
        NotificationType::Recovered,
        record_start,
        format!("entity record discarded: {err}"),
    );
    let skip = RECOVERY_SKIP.min(cursor.remaining());
    cursor.set_position(cursor.position() + skip);
    Ok(())
}

/// Read the common record header shared by every entity.
fn read_common_header(cursor: &mut JwwCursor<'_>) -> Result<(u8, EntityCommon)> {
    let tag = cursor.read_u8()?;
    let layer = cursor.read_u8()?;
    let color = cursor.read_u8()?;
    let line_type = cursor.read_u8()?;
    let line_width = units::width_to_mm(cursor.read_u16()?);
    let group = cursor.read_u8()?;
    cursor.skip(1)?;

    Ok((
        tag,
        EntityCommon {
            layer,
            color,
            line_type,
            line_width,
            group,
        },
    ))
}

/// Read one coordinate pair, converting to millimeters.
fn read_point_mm(cursor: &mut JwwCursor<'_>) -> Result<Vector2> {
    let x = cursor.read_i32()?;
    let y = cursor.read_i32()?;
    Ok(Vector2::new(units::length_to_mm(x), units::length_to_mm(y)))
}

fn decode_line(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let start = read_point_mm(cursor)?;
    let end = read_point_mm(cursor)?;
    Ok(Entity::Line(Line {
        common,
        start,
        end,
    }))
}

fn decode_circle(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let center = read_point_mm(cursor)?;
    let radius = units::length_to_mm(cursor.read_i32()?);
    Ok(Entity::Circle(Circle {
        common,
        center,
        radius,
    }))
}

fn decode_arc(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let center = read_point_mm(cursor)?;
    let radius = units::length_to_mm(cursor.read_i32()?);
    let start_angle = units::angle_to_radians(cursor.read_i16()?);
    let end_angle = units::angle_to_radians(cursor.read_i16()?);
    let flags = ArcFlags::from_bits_truncate(cursor.read_u8()?);
    Ok(Entity::Arc(Arc {
        common,
        center,
        radius,
        start_angle,
        end_angle,
        clockwise: flags.contains(ArcFlags::CLOCKWISE),
    }))
}

fn decode_ellipse(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let center = read_point_mm(cursor)?;
    let radius_x = units::length_to_mm(cursor.read_i32()?);
    let radius_y = units::length_to_mm(cursor.read_i32()?);
    let rotation = units::angle_to_radians(cursor.read_i16()?);
    Ok(Entity::Ellipse(Ellipse {
        common,
        center,
        radius_x,
        radius_y,
        rotation,
    }))
}

fn decode_text(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let position = read_point_mm(cursor)?;
    // Height and width are stored narrow, at the usual length scale
    let height = cursor.read_i16()? as f64 / units::LENGTH_UNITS_PER_MM;
    let width = cursor.read_i16()? as f64 / units::LENGTH_UNITS_PER_MM;
    let angle = units::angle_to_radians(cursor.read_i16()?);
    let alignment = cursor.read_u8()?;
    let font = defaults::font_name(cursor.read_text(FONT_NAME_LEN)?.trim());
    let length = cursor.read_u16()? as usize;
    let value = cursor.read_text(length)?;

    Ok(Entity::Text(Text {
        common,
        position,
        height,
        width,
        angle,
        horizontal_alignment: TextHorizontalAlignment::from_bits(alignment),
        vertical_alignment: TextVerticalAlignment::from_bits(alignment),
        font,
        value,
    }))
}

fn decode_dimension(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let start = read_point_mm(cursor)?;
    let end = read_point_mm(cursor)?;
    let text_position = read_point_mm(cursor)?;
    // The measured value is stored at a finer scale than coordinates
    let value = units::dim_value_to_mm(cursor.read_i32()?);
    let dimension_type = DimensionType::from_raw(cursor.read_u8()?);
    let length = cursor.read_u16()? as usize;
    let stored_text = cursor.read_text(length)?;

    Ok(Entity::Dimension(Dimension {
        common,
        start,
        end,
        text_position,
        value,
        dimension_type,
        text: defaults::dimension_text(stored_text, value),
    }))
}

fn decode_polyline(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let point_count = cursor.read_u16()? as usize;
    let flags = PolylineFlags::from_bits_truncate(cursor.read_u8()?);
    cursor.skip(1)?;

    let mut points = Vec::with_capacity(point_count.min(cursor.remaining() / 8));
    for _ in 0..point_count {
        points.push(read_point_mm(cursor)?);
    }

    Ok(Entity::Polyline(Polyline {
        common,
        points,
        closed: flags.contains(PolylineFlags::CLOSED),
    }))
}

fn decode_point(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let location = read_point_mm(cursor)?;
    Ok(Entity::Point(Point { common, location }))
}

fn decode_solid(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let corners = [
        read_point_mm(cursor)?,
        read_point_mm(cursor)?,
        read_point_mm(cursor)?,
        read_point_mm(cursor)?,
    ];
    Ok(Entity::Solid(Solid { common, corners }))
}

fn decode_hatch(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let point_count = cursor.read_u16()? as usize;
    let pattern = cursor.read_u8()?;
    cursor.skip(1)?;

    let mut boundary = Vec::with_capacity(point_count.min(cursor.remaining() / 8));
    for _ in 0..point_count {
        boundary.push(read_point_mm(cursor)?);
    }

    Ok(Entity::Hatch(Hatch {
        common,
        pattern,
        boundary,
    }))
}

fn decode_block(cursor: &mut JwwCursor<'_>, common: EntityCommon) -> Result<Entity> {
    let insert = read_point_mm(cursor)?;
    // Scale pair is stored at the length scale: 100 = 1.0
    let scale_x = units::length_to_mm(cursor.read_i32()?);
    let scale_y = units::length_to_mm(cursor.read_i32()?);
    let rotation = units::angle_to_radians(cursor.read_i16()?);
    let length = cursor.read_u16()? as usize;
    let name = cursor.read_text(length)?;

    Ok(Entity::Block(BlockInsert {
        common,
        insert,
        scale_x,
        scale_y,
        rotation,
        name,
    }))
}
