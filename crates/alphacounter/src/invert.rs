//! Inversion for descending sort order.

use crate::alphabet;
use crate::error::Result;

/// Complement every symbol of `counter` after left-padding it to `pad`.
///
/// The symbol at position `i` becomes the symbol at position `61 - i`, so
/// among counters of one shared width, ascending order of the inverted
/// strings is descending order of the originals. Inverting twice with the
/// same padding gives back the padded original.
///
/// # Examples
///
/// ```
/// use alphacounter::invert;
///
/// assert_eq!(invert("0", 0).unwrap(), "z");
/// assert_eq!(invert("z", 0).unwrap(), "0");
/// assert_eq!(invert("0", 3).unwrap(), "zzz");
/// assert_eq!(invert("0z0", 3).unwrap(), "z0z");
/// ```
pub fn invert(counter: &str, pad: usize) -> Result<String> {
    Ok(complement(alphabet::symbols(counter)?, pad))
}

/// Invert already validated symbols.
pub(crate) fn complement(symbols: &[u8], pad: usize) -> String {
    let fill = alphabet::width(pad).saturating_sub(symbols.len());

    let mut out = String::with_capacity(fill + symbols.len());
    out.extend(std::iter::repeat(alphabet::MAX as char).take(fill));
    out.extend(
        symbols
            .iter()
            .filter_map(|&b| alphabet::complement(b))
            .map(char::from),
    );
    out
}
