//! Synthetic SEG-Y files for integration tests.

#![allow(dead_code)]

use segyscan::segy::TraceField;
use std::fs;
use std::path::{Path, PathBuf};

/// Header values of one synthetic trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace {
    pub ffid: i32,
    pub source: i32,
    pub sou_x: i32,
    pub sou_y: i32,
    pub sou_elev: i32,
    pub rec_x: i32,
    pub rec_y: i32,
    pub rec_elev: i32,
    pub cdp: i32,
    pub cdp_x: i32,
    pub cdp_y: i32,
}

impl Trace {
    fn fields(&self) -> [(TraceField, i32); 11] {
        [
            (TraceField::FieldRecord, self.ffid),
            (TraceField::EnergySourcePoint, self.source),
            (TraceField::SourceX, self.sou_x),
            (TraceField::SourceY, self.sou_y),
            (TraceField::SourceElevation, self.sou_elev),
            (TraceField::ReceiverX, self.rec_x),
            (TraceField::ReceiverY, self.rec_y),
            (TraceField::ReceiverElevation, self.rec_elev),
            (TraceField::Cdp, self.cdp),
            (TraceField::CdpX, self.cdp_x),
            (TraceField::CdpY, self.cdp_y),
        ]
    }
}

/// Encode a SEG-Y image with the given binary header values and traces.
pub fn segy_bytes(dt_us: u16, samples: u16, traces: &[Trace]) -> Vec<u8> {
    let mut bytes = vec![b' '; 3200];
    let mut binary = [0u8; 400];
    binary[16..18].copy_from_slice(&dt_us.to_be_bytes());
    binary[20..22].copy_from_slice(&samples.to_be_bytes());
    bytes.extend_from_slice(&binary);

    for trace in traces {
        let mut header = [0u8; 240];
        for (field, value) in trace.fields() {
            let offset = field.byte_position() - 1;
            header[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
        }
        bytes.extend_from_slice(&header);
        bytes.extend(std::iter::repeat(0u8).take(usize::from(samples) * 4));
    }
    bytes
}

/// Write a SEG-Y file into `dir`.
pub fn write_segy(dir: &Path, name: &str, dt_us: u16, samples: u16, traces: &[Trace]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, segy_bytes(dt_us, samples, traces)).unwrap();
    path
}

/// Two shots, the first one repeated.
pub fn three_traces() -> Vec<Trace> {
    let a = Trace {
        ffid: 1,
        source: 11,
        sou_x: 100,
        sou_y: 200,
        sou_elev: 10,
        rec_x: 500,
        rec_y: 600,
        rec_elev: 5,
        cdp: 1001,
        cdp_x: 300,
        cdp_y: 400,
    };
    let b = Trace {
        ffid: 2,
        source: 12,
        sou_x: 150,
        sou_y: 250,
        sou_elev: 12,
        rec_x: 510,
        rec_y: 600,
        rec_elev: 6,
        cdp: 1002,
        cdp_x: 330,
        cdp_y: 425,
    };
    vec![a, b, a]
}
