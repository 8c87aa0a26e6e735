//! Section labels for printed output

use crate::settings::Scheme;

/// The label for a section, given its one-origin position within each
/// enclosing series and the index of the top-level series it sits in.
pub fn label(scheme: Scheme, series: usize, ordinals: &[usize]) -> String {
    let Some(&number) = ordinals.last() else {
        return String::new();
    };

    match scheme {
        Scheme::Decimal => ordinals
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("."),
        Scheme::Outline => outline(ordinals),
        Scheme::Ase | Scheme::Rse => match (series, ordinals.len()) {
            (0 | 1, 1) if scheme == Scheme::Rse => format!("Resolution {}", number),
            (0 | 1, _) => outline(ordinals),
            (2, 1) => format!("Schedule {}", number),
            (_, 1) => format!("Exhibit {}", alphabetic(number).to_uppercase()),
            // within a schedule or exhibit, outline numbering starts over
            (_, _) => outline(&ordinals[1..]),
        },
    }
}

// 1. (a) (i) (A) (I) (1), then around again
fn outline(ordinals: &[usize]) -> String {
    let Some(&number) = ordinals.last() else {
        return String::new();
    };

    match (ordinals.len() - 1) % 6 {
        0 => format!("{}.", number),
        1 => format!("({})", alphabetic(number)),
        2 => format!("({})", roman(number)),
        3 => format!("({})", alphabetic(number).to_uppercase()),
        4 => format!("({})", roman(number).to_uppercase()),
        _ => format!("({})", number),
    }
}

/// a, b, ... z, aa, ab, ...
fn alphabetic(mut number: usize) -> String {
    let mut letters = Vec::new();
    while number > 0 {
        number -= 1;
        letters.push((b'a' + (number % 26) as u8) as char);
        number /= 26;
    }
    letters
        .iter()
        .rev()
        .collect()
}

fn roman(mut number: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];

    let mut result = String::new();
    for (value, numeral) in NUMERALS {
        while number >= value {
            result.push_str(numeral);
            number -= value;
        }
    }
    result
}
