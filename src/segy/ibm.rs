//! IBM System/360 hexadecimal float conversion.
//!
//! Sample data is never decoded by the scanner; the conversion lives here so
//! readers of older IBM-format files can reuse it.

/// IBM magnitudes above this overflow an IEEE single (exponent 16^33 and up).
const IBM_MAX_MAGNITUDE: u32 = 0x60ff_ffff;
/// Largest finite IEEE single bit pattern.
const IEEE_MAX: u32 = 0x7f7f_ffff;
/// IBM magnitudes below this underflow to zero.
const IBM_MIN_MAGNITUDE: u32 = 0x00ff_ffff;

/// Exponent correction, indexed by the top 3 mantissa bits.
const EXPONENT_BIAS: [u32; 8] = [
    0x2180_0000,
    0x2140_0000,
    0x2100_0000,
    0x2100_0000,
    0x20c0_0000,
    0x20c0_0000,
    0x20c0_0000,
    0x20c0_0000,
];

/// Mantissa shift factor, indexed by the top 3 mantissa bits.
const MANTISSA_SCALE: [u32; 8] = [8, 4, 2, 2, 1, 1, 1, 1];

/// Convert an IBM float bit pattern to an IEEE-754 single bit pattern.
pub fn ibm_to_ieee(ibm: u32) -> u32 {
    let sign = ibm & 0x8000_0000;
    let magnitude = ibm & 0x7fff_ffff;

    if magnitude < IBM_MIN_MAGNITUDE {
        return 0;
    }
    if magnitude > IBM_MAX_MAGNITUDE {
        return IEEE_MAX | sign;
    }

    let mantissa = ibm & 0x00ff_ffff;
    let ix = (mantissa >> 21) as usize;
    // Below the smallest normal IEEE single.
    let Some(rebased) = (ibm & 0x7f00_0000).checked_sub(EXPONENT_BIAS[ix]) else {
        return 0;
    };

    (mantissa * MANTISSA_SCALE[ix] + (rebased << 1)) | sign
}

/// Convert an IBM float bit pattern to `f32`.
pub fn ibm_to_f32(ibm: u32) -> f32 {
    f32::from_bits(ibm_to_ieee(ibm))
}
