//! ASCII-only encoding for property values.

use std::fmt::Write;

/// Encode a string so that every character outside ASCII becomes a `\uXXXX` escape.
///
/// Codepoints above U+FFFF are written as a UTF-16 surrogate pair, e.g.
/// U+1F600 becomes `\uD83D\uDE00`. ASCII passes through untouched,
/// including `,` `=` `:` and `\`.
#[must_use]
pub fn to_property_value(text: &str) -> String {
    let mut value = String::with_capacity(text.len());

    for ch in text.chars() {
        let codepoint = u32::from(ch);

        if codepoint <= 0x7F {
            value.push(ch);
        } else if codepoint <= 0xFFFF {
            push_escape(&mut value, codepoint);
        } else {
            let offset = codepoint - 0x10000;
            push_escape(&mut value, 0xD800 + offset / 0x400);
            push_escape(&mut value, 0xDC00 + offset % 0x400);
        }
    }

    value
}

fn push_escape(value: &mut String, unit: u32) {
    // Writing to a String cannot fail
    let _ = write!(value, "\\u{unit:04X}");
}
