//! Running min/max ranges over trace header fields.

use super::RawTraceRecord;
use std::fmt;

/// Observed `[min, max]` of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    /// Smallest value seen.
    pub min: i32,
    /// Largest value seen.
    pub max: i32,
}

impl FieldRange {
    /// Range covering a single value.
    pub fn new(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the range to include `value`.
    pub fn fold(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Widen the range to include another range.
    pub fn merge(&mut self, other: FieldRange) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Fields tracked in the ranges table, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeField {
    /// Field record number.
    Ffid,
    /// Channel (trace number).
    Chan,
    /// CDP number.
    Cdp,
    /// Source point number.
    Source,
    /// Source X.
    SouX,
    /// Source Y.
    SouY,
    /// Source elevation.
    SouElev,
    /// Receiver X.
    RecX,
    /// Receiver Y.
    RecY,
    /// Receiver elevation.
    RecElev,
    /// CDP X.
    CdpX,
    /// CDP Y.
    CdpY,
    /// Inline.
    Iline,
    /// Crossline.
    Xline,
}

impl RangeField {
    /// All fields in report order.
    pub const ALL: [RangeField; 14] = [
        RangeField::Ffid,
        RangeField::Chan,
        RangeField::Cdp,
        RangeField::Source,
        RangeField::SouX,
        RangeField::SouY,
        RangeField::SouElev,
        RangeField::RecX,
        RangeField::RecY,
        RangeField::RecElev,
        RangeField::CdpX,
        RangeField::CdpY,
        RangeField::Iline,
        RangeField::Xline,
    ];

    /// Row label in the ranges table.
    pub fn label(self) -> &'static str {
        match self {
            RangeField::Ffid => "FFID",
            RangeField::Chan => "Chan",
            RangeField::Cdp => "CDP",
            RangeField::Source => "Source",
            RangeField::SouX => "Sou_X",
            RangeField::SouY => "Sou_Y",
            RangeField::SouElev => "Sou_Elev",
            RangeField::RecX => "Rec_X",
            RangeField::RecY => "Rec_Y",
            RangeField::RecElev => "Rec_Elev",
            RangeField::CdpX => "CDP_X",
            RangeField::CdpY => "CDP_Y",
            RangeField::Iline => "ILINE",
            RangeField::Xline => "XLINE",
        }
    }

    /// The record value this field tracks.
    pub fn value(self, record: &RawTraceRecord) -> i32 {
        match self {
            RangeField::Ffid => record.ffid,
            RangeField::Chan => record.trace_number,
            RangeField::Cdp => record.cdp,
            RangeField::Source => record.source,
            RangeField::SouX => record.sou_x,
            RangeField::SouY => record.sou_y,
            RangeField::SouElev => record.sou_elev,
            RangeField::RecX => record.rec_x,
            RangeField::RecY => record.rec_y,
            RangeField::RecElev => record.rec_elev,
            RangeField::CdpX => record.cdp_x,
            RangeField::CdpY => record.cdp_y,
            RangeField::Iline => record.iline,
            RangeField::Xline => record.xline,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Ranges of every [`RangeField`] for one file. Empty until the first trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRanges {
    ranges: Option<[FieldRange; 14]>,
}

impl HeaderRanges {
    /// Create empty ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trace record into every range.
    pub fn fold(&mut self, record: &RawTraceRecord) {
        match &mut self.ranges {
            Some(ranges) => {
                for field in RangeField::ALL {
                    ranges[field.index()].fold(field.value(record));
                }
            },
            None => {
                self.ranges = Some(RangeField::ALL.map(|field| FieldRange::new(field.value(record))));
            },
        }
    }

    /// Combine with ranges collected elsewhere.
    pub fn merge(&mut self, other: &HeaderRanges) {
        let Some(theirs) = &other.ranges else {
            return;
        };
        match &mut self.ranges {
            Some(ours) => {
                for (a, b) in ours.iter_mut().zip(theirs) {
                    a.merge(*b);
                }
            },
            None => self.ranges = Some(*theirs),
        }
    }

    /// Range of one field, if any trace has been folded.
    pub fn get(&self, field: RangeField) -> Option<FieldRange> {
        self.ranges.map(|ranges| ranges[field.index()])
    }

    /// Whether no trace has been folded yet.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_none()
    }

    /// Fields and their ranges in report order.
    pub fn iter(&self) -> impl Iterator<Item = (RangeField, FieldRange)> + '_ {
        self.ranges
            .iter()
            .flat_map(|ranges| RangeField::ALL.into_iter().map(move |f| (f, ranges[f.index()])))
    }
}
