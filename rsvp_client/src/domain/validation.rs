// Clamp a raw companion-count edit into the allotted closed range [0, max].
// Blank and non-numeric input count as zero before clamping. This is the
// only validation boundary in the whole flow, so the ceiling must always be
// re-derived from the guest record by the caller.
pub fn clamp_companions(raw: &str, max: u32) -> u32 {
    let candidate = raw.trim().parse::<i64>().unwrap_or(0);
    candidate.clamp(0, i64::from(max)) as u32
}
