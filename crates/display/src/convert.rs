/// Pack an HWC RGB buffer into `0x00RRGGBB` pixels for minifb.
///
/// Trailing bytes that do not form a whole pixel are ignored.
pub fn rgb_to_u32(data: &[u8]) -> Vec<u32> {
    data.chunks_exact(3)
        .map(|c| (c[0] as u32) << 16 | (c[1] as u32) << 8 | c[2] as u32)
        .collect()
}
