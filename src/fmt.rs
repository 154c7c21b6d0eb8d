use core::fmt::{self, Formatter};

pub(crate) fn u8_units(units: &[u8], f: &mut Formatter) -> fmt::Result {
    write!(f, "\"")?;
    for b in units.iter().copied() {
        match b {
            b'\0'           => write!(f, "\\0")?,
            b'\t'           => write!(f, "\\t")?,
            b'\r'           => write!(f, "\\r")?,
            b'\n'           => write!(f, "\\n")?,
            b'\''           => write!(f, "\\'")?,
            b'\"'           => write!(f, "\\\"")?,
            b'\\'           => write!(f, "\\\\")?,
            0x20 ..= 0x7E   => write!(f, "{}", b as char)?,
            esc             => write!(f, "\\x{:02x}", esc)?,
        }
    }
    write!(f, "\"")?;
    Ok(())
}

pub(crate) fn u16_units(units: &[u16], f: &mut Formatter) -> fmt::Result {
    write!(f, "\"")?;
    for u in units.iter().copied() {
        match u {
            0x0000          => write!(f, "\\0")?,
            0x0009          => write!(f, "\\t")?,
            0x000D          => write!(f, "\\r")?,
            0x000A          => write!(f, "\\n")?,
            0x0027          => write!(f, "\\'")?,
            0x0022          => write!(f, "\\\"")?,
            0x005C          => write!(f, "\\\\")?,
            0x20 ..= 0x7E   => write!(f, "{}", u as u8 as char)?,

            // Rust has no UTF-16 code unit escape; use a C-style "ሴ" rather than
            // Rust's "\u{1234}" so a lone surrogate here doesn't look like a valid scalar escape.
            esc             => write!(f, "\\u{:04x}", esc)?,
        }
    }
    write!(f, "\"")?;
    Ok(())
}

pub(crate) fn u32_units(units: &[u32], f: &mut Formatter) -> fmt::Result {
    write!(f, "\"")?;
    for u in units.iter().copied() {
        match u {
            0x00000000      => write!(f, "\\0")?,
            0x00000009      => write!(f, "\\t")?,
            0x0000000D      => write!(f, "\\r")?,
            0x0000000A      => write!(f, "\\n")?,
            0x00000027      => write!(f, "\\'")?,
            0x00000022      => write!(f, "\\\"")?,
            0x0000005C      => write!(f, "\\\\")?,
            0x20 ..= 0x7E   => write!(f, "{}", u as u8 as char)?,
            esc             => write!(f, "\\u{{{:x}}}", esc)?,
        }
    }
    write!(f, "\"")?;
    Ok(())
}

pub(crate) fn char_units(units: &[char], f: &mut Formatter) -> fmt::Result {
    write!(f, "\"")?;
    for c in units.iter().copied() {
        match c {
            '\0'        => write!(f, "\\0")?,
            '\t'        => write!(f, "\\t")?,
            '\r'        => write!(f, "\\r")?,
            '\n'        => write!(f, "\\n")?,
            '\''        => write!(f, "\\'")?,
            '\"'        => write!(f, "\\\"")?,
            '\\'        => write!(f, "\\\\")?,
            ' ' ..= '~' => write!(f, "{}", c)?,
            esc         => write!(f, "\\u{{{:x}}}", esc as u32)?,
        }
    }
    write!(f, "\"")?;
    Ok(())
}
