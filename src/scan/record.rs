//! Per-trace header records.

use crate::error::Result;
use crate::segy::{SegyReader, TraceField};

/// The header values the scanner keeps from one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawTraceRecord {
    /// Field record number.
    pub ffid: i32,
    /// Trace number within the field record (channel).
    pub trace_number: i32,
    /// CDP ensemble number.
    pub cdp: i32,
    /// Energy source point number.
    pub source: i32,
    /// Source X.
    pub sou_x: i32,
    /// Source Y.
    pub sou_y: i32,
    /// Source surface elevation.
    pub sou_elev: i32,
    /// Receiver X.
    pub rec_x: i32,
    /// Receiver Y.
    pub rec_y: i32,
    /// Receiver elevation.
    pub rec_elev: i32,
    /// CDP X.
    pub cdp_x: i32,
    /// CDP Y.
    pub cdp_y: i32,
    /// 3D inline number.
    pub iline: i32,
    /// 3D crossline number.
    pub xline: i32,
}

impl RawTraceRecord {
    /// Read one trace's record through the named header accessors.
    pub fn read(reader: &SegyReader, trace_index: usize) -> Result<Self> {
        let get = |field: TraceField| reader.get_trace_header_i32(trace_index, field.name());

        Ok(Self {
            ffid: get(TraceField::FieldRecord)?,
            trace_number: get(TraceField::TraceNumber)?,
            cdp: get(TraceField::Cdp)?,
            source: get(TraceField::EnergySourcePoint)?,
            sou_x: get(TraceField::SourceX)?,
            sou_y: get(TraceField::SourceY)?,
            sou_elev: get(TraceField::SourceElevation)?,
            rec_x: get(TraceField::ReceiverX)?,
            rec_y: get(TraceField::ReceiverY)?,
            rec_elev: get(TraceField::ReceiverElevation)?,
            cdp_x: get(TraceField::CdpX)?,
            cdp_y: get(TraceField::CdpY)?,
            iline: get(TraceField::Inline3D)?,
            xline: get(TraceField::Crossline3D)?,
        })
    }
}
