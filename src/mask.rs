// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::MaskError;

/// Length of a WebSocket masking key, fixed by RFC 6455.
pub const KEY_LEN: usize = 4;

#[inline]
fn xor_fallback(payload: &mut [u8], mask: [u8; 4]) {
    for i in 0..payload.len() {
        payload[i] ^= mask[i & 3];
    }
}

#[inline]
fn xor_fast(words: &mut [u32], mask: u32) {
    for word in words.iter_mut() {
        *word ^= mask;
    }
}

// Operates on 4-byte blocks where alignment allows, with a byte-wise
// fallback for the unaligned head and tail.
// https://github.com/snapview/tungstenite-rs/blob/e5efe537b87a6705467043fe44bb220ddf7c1ce8/src/protocol/frame/mask.rs#L23
fn apply_mask(buf: &mut [u8], mut mask: [u8; 4]) {
    let (prefix, words, suffix) = bytemuck::pod_align_to_mut::<u8, u32>(buf);
    let head = prefix.len() & 3;
    xor_fallback(prefix, mask);
    mask.rotate_left(head);
    xor_fallback(suffix, mask);

    xor_fast(words, u32::from_ne_bytes(mask))
}

/// Masks `input` against a 4-byte `key`, returning a freshly allocated
/// buffer where byte `i` is `input[i] ^ key[i % 4]`.
///
/// Masking is an involution: applying it twice with the same key restores
/// the original bytes, so this one function covers both directions of the
/// WebSocket client-to-server masking requirement.
///
/// Fails with [`MaskError::InvalidKeyLength`] if `key` is not exactly
/// 4 bytes long; nothing is allocated in that case. An empty `input` is
/// valid and yields an empty buffer.
pub fn mask(input: &[u8], key: &[u8]) -> Result<Vec<u8>, MaskError> {
    let key: [u8; KEY_LEN] = key
        .try_into()
        .map_err(|_| MaskError::InvalidKeyLength(key.len()))?;

    let mut output = input.to_vec();
    apply_mask(&mut output, key);
    Ok(output)
}
