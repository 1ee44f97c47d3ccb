use bytes::Bytes;

/// Decodes a plain-text upload. Invalid UTF-8 is an error, not a lossy decode.
pub fn decode_plain_text(bytes: Bytes) -> Result<String, std::string::FromUtf8Error> {
    String::from_utf8(bytes.to_vec())
}
