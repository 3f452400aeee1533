//! Trace header field table.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Named trace header fields read by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceField {
    /// Original field record number (FFID).
    FieldRecord,
    /// Trace number within the field record.
    TraceNumber,
    /// Ensemble (CDP) number.
    Cdp,
    /// Energy source point number.
    EnergySourcePoint,
    /// Receiver group elevation.
    ReceiverElevation,
    /// Surface elevation at source.
    SourceElevation,
    /// Source coordinate X.
    SourceX,
    /// Source coordinate Y.
    SourceY,
    /// Group coordinate X.
    ReceiverX,
    /// Group coordinate Y.
    ReceiverY,
    /// X coordinate of the ensemble position.
    CdpX,
    /// Y coordinate of the ensemble position.
    CdpY,
    /// 3D inline number.
    Inline3D,
    /// 3D crossline number.
    Crossline3D,
}

/// Location of a field inside the 240-byte trace header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 0-based byte offset.
    pub offset: usize,
    /// Width in bytes.
    pub width: usize,
}

impl TraceField {
    /// All fields, in header order of the record they fill.
    pub const ALL: [TraceField; 14] = [
        TraceField::FieldRecord,
        TraceField::TraceNumber,
        TraceField::Cdp,
        TraceField::EnergySourcePoint,
        TraceField::SourceX,
        TraceField::SourceY,
        TraceField::SourceElevation,
        TraceField::ReceiverX,
        TraceField::ReceiverY,
        TraceField::ReceiverElevation,
        TraceField::CdpX,
        TraceField::CdpY,
        TraceField::Inline3D,
        TraceField::Crossline3D,
    ];

    /// Header name used by name-based lookups.
    pub fn name(self) -> &'static str {
        match self {
            TraceField::FieldRecord => "FieldRecord",
            TraceField::TraceNumber => "TraceNumber",
            TraceField::Cdp => "CDP",
            TraceField::EnergySourcePoint => "EnergySourcePoint",
            TraceField::ReceiverElevation => "ReceiverElevation",
            TraceField::SourceElevation => "SourceElevation",
            TraceField::SourceX => "SourceX",
            TraceField::SourceY => "SourceY",
            TraceField::ReceiverX => "ReceiverX",
            TraceField::ReceiverY => "ReceiverY",
            TraceField::CdpX => "CDP_X",
            TraceField::CdpY => "CDP_Y",
            TraceField::Inline3D => "ILINE_3D",
            TraceField::Crossline3D => "CROSSLINE_3D",
        }
    }

    /// 1-based byte position as listed in the SEG-Y standard.
    pub fn byte_position(self) -> usize {
        match self {
            TraceField::FieldRecord => 1,
            TraceField::TraceNumber => 5,
            TraceField::Cdp => 21,
            TraceField::EnergySourcePoint => 25,
            TraceField::ReceiverElevation => 41,
            TraceField::SourceElevation => 45,
            TraceField::SourceX => 73,
            TraceField::SourceY => 77,
            TraceField::ReceiverX => 81,
            TraceField::ReceiverY => 85,
            TraceField::CdpX => 181,
            TraceField::CdpY => 185,
            TraceField::Inline3D => 189,
            TraceField::Crossline3D => 193,
        }
    }

    /// Look up a field by its header name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// 32-bit location of this field.
    pub fn spec_i32(self) -> FieldSpec {
        FieldSpec {
            offset: self.byte_position() - 1,
            width: 4,
        }
    }
}

/// Name to location table for 32-bit reads.
pub(crate) fn i32_table() -> &'static HashMap<&'static str, FieldSpec> {
    static TABLE: OnceLock<HashMap<&'static str, FieldSpec>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TraceField::ALL
            .into_iter()
            .map(|field| (field.name(), field.spec_i32()))
            .collect()
    })
}

/// Name to location table for 16-bit reads. Only the trace number has a
/// 16-bit reading.
pub(crate) fn i16_table() -> &'static HashMap<&'static str, FieldSpec> {
    static TABLE: OnceLock<HashMap<&'static str, FieldSpec>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let field = TraceField::TraceNumber;
        HashMap::from([(
            field.name(),
            FieldSpec {
                offset: field.byte_position() - 1,
                width: 2,
            },
        )])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for field in TraceField::ALL {
            assert_eq!(TraceField::from_name(field.name()), Some(field));
        }
        assert_eq!(TraceField::from_name("Bogus"), None);
    }

    #[test]
    fn table_uses_zero_based_offsets() {
        let table = i32_table();
        assert_eq!(table.len(), 14);
        assert_eq!(table["FieldRecord"].offset, 0);
        assert_eq!(table["SourceX"].offset, 72);
        assert_eq!(table["CROSSLINE_3D"].offset, 192);
        assert_eq!(i16_table()["TraceNumber"], FieldSpec { offset: 4, width: 2 });
    }
}
