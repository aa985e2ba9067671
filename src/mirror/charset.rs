use encoding_rs::{Encoding, UTF_8};
use mime::Mime;

/// How far into a document a `<meta charset>` declaration is looked for
const META_SNIFF_LEN: usize = 1024;

/// A decoded page together with the encoding it arrived in
#[derive(Debug, Clone)]
pub struct PageText {
    pub html: String,
    pub encoding: &'static Encoding,
}

/// Decode a page body.
///
/// The encoding is taken from a byte order mark, then from the `charset` of
/// the `Content-Type` header, then from a `<meta charset>` near the start of
/// the document. UTF-8 is used when none of them names a known encoding.
pub fn decode_page(body: &[u8], content_type: Option<&str>) -> PageText {
    let declared = content_type
        .and_then(charset_from_content_type)
        .or_else(|| charset_from_meta(body).map(Encoding::output_encoding))
        .unwrap_or(UTF_8);

    let (html, encoding, _) = declared.decode(body);
    PageText {
        html: html.into_owned(),
        encoding,
    }
}

/// Encode `html` back into `encoding`.
/// Characters the encoding can't represent become numeric character references.
pub fn encode_page(html: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(html);
    bytes.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let parsed: Mime = content_type.parse().ok()?;
    let charset = parsed.get_param(mime::CHARSET)?;
    Encoding::for_label(charset.as_str().as_bytes())
}

/// Finds `charset=` in the first bytes of the document, which covers both
/// `<meta charset="..">` and the `http-equiv` form. A UTF-16 label found this
/// way means UTF-8, since the bytes were readable as ASCII.
fn charset_from_meta(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_LEN)];
    let lowered = head.to_ascii_lowercase();
    let needle = b"charset=";
    let start = lowered.windows(needle.len()).position(|w| w == needle)? + needle.len();

    let label: Vec<u8> = lowered[start..]
        .iter()
        .copied()
        .skip_while(|b| *b == b'"' || *b == b'\'' || b.is_ascii_whitespace())
        .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
        .collect();

    Encoding::for_label(&label)
}
