// PLMN encoding and decoding
// Reference: 3GPP TS 24.008, section 10.5.1.13 (PLMN list / Location Area Identification)
//
// A PLMN is carried on the wire as three BCD octets with swapped nibbles:
//   octet 1: MCC digit 2 | MCC digit 1
//   octet 2: MNC digit 3 | MCC digit 3
//   octet 3: MNC digit 2 | MNC digit 1
// A missing digit is sent as the filler nibble 0xF.

use crate::error::PlmnError;

/// Filler nibble for absent digits
pub const FILLER: char = 'F';

/// Minimum length of an encoded PLMN
pub const ENCODED_PLMN_LEN: usize = 6;

fn rpad(value: &str, len: usize) -> Vec<char> {
    let mut chars: Vec<char> = value.chars().collect();
    while chars.len() < len {
        chars.push(FILLER);
    }
    chars
}

/// Encode an MCC on its own (two octets, filler-padded to four nibbles)
pub fn encode_mcc(mcc: &str) -> String {
    let d = rpad(mcc, 4);
    [d[1], d[0], d[3], d[2]].iter().collect()
}

/// Encode an MCC/MNC pair into the 6-nibble swapped form
///
/// A single-digit MNC is first widened to two digits with a leading `0`,
/// so `"1"` and `"01"` encode identically and decode to `"01"`.
pub fn encode_plmn(mcc: &str, mnc: &str) -> String {
    let mcc = rpad(mcc, 3);
    let mnc = if mnc.chars().count() == 1 {
        rpad(&format!("0{}", mnc), 3)
    } else {
        rpad(mnc, 3)
    };

    [mcc[1], mcc[0], mnc[2], mcc[2], mnc[1], mnc[0]].iter().collect()
}

/// Decode a nibble-swapped PLMN back to its `(mcc, mnc)` pair
///
/// Only the first six characters are read. Filler nibbles are dropped from
/// both halves, case-insensitively.
pub fn decode_plmn(plmn: &str) -> Result<(String, String), PlmnError> {
    let p: Vec<char> = plmn.chars().collect();
    if p.len() < ENCODED_PLMN_LEN {
        return Err(PlmnError::TooShort { len: p.len() });
    }

    let mcc = strip_filler([p[1], p[0], p[3]]);
    let mnc = strip_filler([p[5], p[4], p[2]]);

    Ok((mcc, mnc))
}

fn strip_filler(digits: [char; 3]) -> String {
    digits
        .iter()
        .flat_map(|c| c.to_uppercase())
        .filter(|&c| c != FILLER)
        .collect()
}
