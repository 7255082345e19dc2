//! A hand-assembled sfnt face for exercising font-backed measurement without
//! shipping a font file. It carries only the tables `owned_ttf_parser`
//! requires plus a cmap and hmtx: 1000 units per em, ascender 800, descender
//! -200, zero line gap, with `'A'` mapped to glyph 1 (advance 600) and
//! U+FFFD to glyph 2 (advance 400). Every other character is unmapped, which
//! is exactly what the replacement-glyph fallback needs.

use crate::font::Font;

pub const UPEM: f32 = 1000.0;
pub const ADVANCE_A: f32 = 600.0;
pub const ADVANCE_REPLACEMENT: f32 = 400.0;
pub const ASCENDER: f32 = 800.0;
pub const DESCENDER: f32 = -200.0;

pub fn font() -> Font {
    Font::load(face_bytes()).expect("assembled face parses")
}

pub fn face_bytes() -> Vec<u8> {
    let tables: [(&[u8; 4], Vec<u8>); 5] = [
        (b"cmap", cmap()),
        (b"head", head()),
        (b"hhea", hhea()),
        (b"hmtx", hmtx()),
        (b"maxp", maxp()),
    ];

    let mut data = Vec::new();
    push_u32(&mut data, 0x0001_0000); // sfnt version
    push_u16(&mut data, tables.len() as u16);
    // searchRange / entrySelector / rangeShift, unread by the parser
    push_u16(&mut data, 64);
    push_u16(&mut data, 2);
    push_u16(&mut data, 16);

    let mut offset = 12 + tables.len() * 16;
    for (tag, table) in &tables {
        data.extend_from_slice(*tag);
        push_u32(&mut data, 0); // checksum, unchecked
        push_u32(&mut data, offset as u32);
        push_u32(&mut data, table.len() as u32);
        offset += (table.len() + 3) & !3;
    }
    for (_, table) in &tables {
        data.extend_from_slice(table);
        while data.len() % 4 != 0 {
            data.push(0);
        }
    }

    data
}

/// Format 12 segmented coverage: 'A' -> glyph 1, U+FFFD -> glyph 2
fn cmap() -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 0); // version
    push_u16(&mut t, 1); // numTables
    push_u16(&mut t, 3); // platform: windows
    push_u16(&mut t, 10); // encoding: full unicode
    push_u32(&mut t, 12); // subtable offset
    push_u16(&mut t, 12); // format
    push_u16(&mut t, 0); // reserved
    push_u32(&mut t, 40); // subtable length
    push_u32(&mut t, 0); // language
    push_u32(&mut t, 2); // numGroups
    for (start, end, glyph) in [(0x41u32, 0x41u32, 1u32), (0xFFFD, 0xFFFD, 2)] {
        push_u32(&mut t, start);
        push_u32(&mut t, end);
        push_u32(&mut t, glyph);
    }
    t
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_u32(&mut t, 0x0001_0000); // fontRevision
    push_u32(&mut t, 0); // checkSumAdjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, UPEM as u16);
    t.extend_from_slice(&[0u8; 16]); // created + modified
    push_i16(&mut t, 0); // xMin
    push_i16(&mut t, DESCENDER as i16); // yMin
    push_i16(&mut t, ADVANCE_A as i16); // xMax
    push_i16(&mut t, ASCENDER as i16); // yMax
    push_u16(&mut t, 0); // macStyle
    push_u16(&mut t, 8); // lowestRecPPEM
    push_i16(&mut t, 2); // fontDirectionHint
    push_i16(&mut t, 0); // indexToLocFormat
    push_i16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_i16(&mut t, ASCENDER as i16);
    push_i16(&mut t, DESCENDER as i16);
    push_i16(&mut t, 0); // lineGap
    push_u16(&mut t, ADVANCE_A as u16); // advanceWidthMax
    push_i16(&mut t, 0); // minLeftSideBearing
    push_i16(&mut t, 0); // minRightSideBearing
    push_i16(&mut t, ADVANCE_A as i16); // xMaxExtent
    push_i16(&mut t, 1); // caretSlopeRise
    push_i16(&mut t, 0); // caretSlopeRun
    push_i16(&mut t, 0); // caretOffset
    t.extend_from_slice(&[0u8; 8]); // reserved
    push_i16(&mut t, 0); // metricDataFormat
    push_u16(&mut t, 3); // numberOfHMetrics
    t
}

/// Advances for glyphs 0 (notdef), 1 ('A'), and 2 (replacement)
fn hmtx() -> Vec<u8> {
    let mut t = Vec::new();
    for advance in [500u16, ADVANCE_A as u16, ADVANCE_REPLACEMENT as u16] {
        push_u16(&mut t, advance);
        push_i16(&mut t, 0); // leftSideBearing
    }
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0000_5000); // version 0.5
    push_u16(&mut t, 3); // numGlyphs
    t
}

fn push_u16(v: &mut Vec<u8>, x: u16) {
    v.extend_from_slice(&x.to_be_bytes());
}

fn push_i16(v: &mut Vec<u8>, x: i16) {
    v.extend_from_slice(&x.to_be_bytes());
}

fn push_u32(v: &mut Vec<u8>, x: u32) {
    v.extend_from_slice(&x.to_be_bytes());
}
