use encoding_rs::SHIFT_JIS;

use crate::error::MotionConverterError;

/// Encodes text as Shift_JIS bytes.
///
/// MMD's CSV tooling predates Unicode adoption and reads the motion table
/// in this legacy encoding regardless of what the input files used. Any
/// character without a Shift_JIS mapping is an error rather than a silent
/// substitution, so a bad motion name cannot corrupt the output file.
pub fn encode_shift_jis(text: &str) -> Result<Vec<u8>, MotionConverterError> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
    if had_errors {
        return Err(MotionConverterError::Encoding(
            "text contains characters with no Shift_JIS representation".to_string(),
        ));
    }
    Ok(bytes.into_owned())
}
