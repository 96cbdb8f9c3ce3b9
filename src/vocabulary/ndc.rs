//! National Drug Code normalization
//!
//! NDCs are printed as 10 digits in one of three hyphenated layouts (4-4-2,
//! 5-3-2, 5-4-1). Master data carries the 11-digit 5-4-2 form without
//! hyphens, obtained by left-padding whichever segment is short.

/// Segment widths of the 11-digit 5-4-2 layout
const NDC11_SEGMENTS: [usize; 3] = [5, 4, 2];

/// Position of the product segment in an unhyphenated 5-3-2 NDC
const PRODUCT_SEGMENT_START: usize = 5;

/// Normalize an NDC to its 11-digit hyphen-free form
///
/// Hyphenated input is padded segment by segment. Unhyphenated 10-digit input
/// has no layout information and is treated as 5-3-2. Anything that does not
/// look like an NDC comes back with separators stripped and is otherwise left
/// alone, so the function is idempotent.
pub fn normalize_ndc(ndc: &str) -> String {
    let trimmed = ndc.trim();
    let segments: Vec<&str> = trimmed.split('-').map(str::trim).collect();

    if segments.len() == NDC11_SEGMENTS.len()
        && segments.iter().all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        && segments.iter().zip(NDC11_SEGMENTS).all(|(s, width)| s.len() <= width)
    {
        return segments
            .iter()
            .zip(NDC11_SEGMENTS)
            .map(|(segment, width)| format!("{:0>width$}", segment, width = width))
            .collect();
    }

    let digits: String = trimmed.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect();
    if digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit()) {
        let (labeler, rest) = digits.split_at(PRODUCT_SEGMENT_START);
        return format!("{}0{}", labeler, rest);
    }
    digits
}

/// Whether a value is already a normalized 11-digit NDC
pub fn is_ndc11(ndc: &str) -> bool {
    ndc.len() == 11 && ndc.chars().all(|c| c.is_ascii_digit())
}
