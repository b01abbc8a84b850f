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

//! _ws_mask_ implements the payload masking transform of the WebSocket wire
//! protocol ([RFC 6455 §5.3]): a byte-wise XOR of a payload against a
//! repeating 4-byte key. The transform is its own inverse, so the same call
//! masks outgoing client frames and unmasks them on the server side.
//!
//! This crate is only the transform. Frame parsing, handshakes, and key
//! generation belong to the framing layer that calls it, which hands over an
//! already-extracted payload and key and consumes the returned buffer.
//!
//! # Example
//!
//! ```
//! use ws_mask::mask;
//!
//! let key = [0x37, 0xFA, 0x21, 0x3D];
//! let masked = mask(b"Hello", &key)?;
//! assert_eq!(mask(&masked, &key)?, b"Hello");
//! # Ok::<(), ws_mask::MaskError>(())
//! ```
//!
//! [RFC 6455 §5.3]: https://datatracker.ietf.org/doc/html/rfc6455#section-5.3

mod error;
mod mask;

pub use crate::error::MaskError;
pub use crate::mask::mask;
pub use crate::mask::KEY_LEN;
