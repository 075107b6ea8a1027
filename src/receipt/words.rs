//! Turkish cardinal numbers for receipt text
//!
//! Receipts spell the amount as one lowercase word without spaces, the way it
//! is written on Turkish legal documents: 21000 is "yirmibin", 1250 is
//! "binikiyüzelli".

const ONES: [&str; 10] = [
    "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

/// Scale word for each base-1000 chunk, least significant first
const SCALES: [&str; 7] = [
    "", "bin", "milyon", "milyar", "trilyon", "katrilyon", "kentilyon",
];

const ZERO: &str = "sıfır";

/// Spell out a non-negative integer in Turkish
///
/// # Examples
/// ```
/// use kasa::receipt::to_words;
/// assert_eq!(to_words(0), "sıfır");
/// assert_eq!(to_words(1000), "bin");
/// assert_eq!(to_words(21000), "yirmibin");
/// ```
pub fn to_words(n: u64) -> String {
    if n == 0 {
        return ZERO.to_string();
    }

    let mut chunks = Vec::new();
    let mut rest = n;
    while rest > 0 {
        chunks.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut words = String::new();
    for (scale, &chunk) in chunks.iter().enumerate().rev() {
        if chunk == 0 {
            continue;
        }
        // Turkish says "bin", not "birbin"
        if !(scale == 1 && chunk == 1) {
            words.push_str(&chunk_words(chunk));
        }
        words.push_str(SCALES[scale]);
    }

    words
}

/// Words for 1..=999
fn chunk_words(chunk: usize) -> String {
    let hundreds = chunk / 100;
    let tens = (chunk % 100) / 10;
    let ones = chunk % 10;

    let mut words = String::new();
    if hundreds > 0 {
        // "yüz", not "biryüz"
        if hundreds > 1 {
            words.push_str(ONES[hundreds]);
        }
        words.push_str("yüz");
    }
    words.push_str(TENS[tens]);
    words.push_str(ONES[ones]);
    words
}
