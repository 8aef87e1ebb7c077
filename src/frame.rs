use crate::Error;

/// Prefix sent by the capture server before the point records.
pub(crate) const MAGIC: [u8; 2] = *b"pc";
/// Magic plus a little-endian `u64` point count.
pub(crate) const HEADER_LEN: usize = 10;
/// Three `f32` coordinates followed by three `u8` color channels.
pub(crate) const POINT_LEN: usize = 15;

#[derive(Debug, Eq, PartialEq)]
pub(crate) struct FrameHeader {
  pub(crate) point_count: u64,
}

/// Checks that `payload` looks like a capture frame: the `pc` magic, a point
/// count, and exactly `point_count` records behind the header. Purely
/// diagnostic, the stored file always holds the payload verbatim.
pub(crate) fn inspect(payload: &[u8]) -> crate::Result<FrameHeader> {
  if payload.len() < HEADER_LEN {
    return Err(Error::FrameTruncatedHeader);
  }
  if payload[..2] != MAGIC {
    return Err(Error::FrameBadMagic);
  }
  let mut count_bytes = [0; 8];
  count_bytes.copy_from_slice(&payload[2..HEADER_LEN]);
  let point_count = u64::from_le_bytes(count_bytes);
  let records_len = usize::try_from(point_count)
    .ok()
    .and_then(|elem| elem.checked_mul(POINT_LEN))
    .and_then(|elem| elem.checked_add(HEADER_LEN));
  if records_len != Some(payload.len()) {
    return Err(Error::FrameLengthMismatch { len: payload.len(), point_count });
  }
  Ok(FrameHeader { point_count })
}
