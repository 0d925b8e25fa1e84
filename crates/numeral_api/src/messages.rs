//! User-facing error message catalogue.

use crate::config::MessageLocale;
use numeral_core::{CodecError, FormatError};

const RANGE_ES: &str = "El número debe ser un entero entre 1 y 3999.";
const FORMAT_ES: &str = "El formato del número romano es inválido o excede el rango.";
const EMPTY_ES: &str = "La entrada debe ser una cadena de texto no vacía.";

/// Renders a codec error in the requested language.
///
/// English text is the codec's own `Display` output; other locales map each
/// error kind to a fixed translation.
pub fn error_message(err: &CodecError, locale: MessageLocale) -> String {
    match locale {
        MessageLocale::English => err.to_string(),
        MessageLocale::Spanish => match err {
            CodecError::Range(_) => RANGE_ES.to_string(),
            CodecError::Format(FormatError::Empty) => EMPTY_ES.to_string(),
            CodecError::Format(_) => FORMAT_ES.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::error_message;
    use crate::config::MessageLocale;
    use numeral_core::{CodecError, FormatError, RangeError};

    #[test]
    fn english_uses_codec_display() {
        let err = CodecError::from(RangeError::OutOfRange(0));
        assert_eq!(
            error_message(&err, MessageLocale::English),
            "value must be an integer between 1 and 3999"
        );
    }

    #[test]
    fn spanish_covers_every_kind() {
        assert_eq!(
            error_message(&CodecError::from(RangeError::NotNumeric), MessageLocale::Spanish),
            "El número debe ser un entero entre 1 y 3999."
        );
        assert_eq!(
            error_message(&CodecError::from(FormatError::InvalidStructure), MessageLocale::Spanish),
            "El formato del número romano es inválido o excede el rango."
        );
        assert_eq!(
            error_message(&CodecError::from(FormatError::Empty), MessageLocale::Spanish),
            "La entrada debe ser una cadena de texto no vacía."
        );
    }
}
