use ws_mask::mask;
use ws_mask::MaskError;
use ws_mask::KEY_LEN;

use assert2::assert;
use assert2::let_assert;

#[test]
fn involution() {
    for len in [0usize, 1, 3, 4, 5, 16, 17, 1023, 1024, 1025] {
        let key = rand::random::<[u8; KEY_LEN]>();
        let payload: Vec<u8> = (0..len).map(|_| rand::random()).collect();

        let_assert!(Ok(masked) = mask(&payload, &key));
        assert!(masked.len() == payload.len());

        let_assert!(Ok(unmasked) = mask(&masked, &key));
        assert!(unmasked == payload);
    }
}

#[test]
fn empty_payload() {
    let key = rand::random::<[u8; KEY_LEN]>();
    let_assert!(Ok(output) = mask(b"", &key));
    assert!(output.is_empty());
}

#[test]
fn input_is_not_mutated() {
    let key = [0x37, 0xFA, 0x21, 0x3D];
    let payload = b"Hello, WebSocket!".to_vec();
    let snapshot = payload.clone();

    let_assert!(Ok(masked) = mask(&payload, &key));
    assert!(payload == snapshot);
    assert!(masked != payload);
}

#[test]
fn wrong_key_length_reports_the_length() {
    for bad in [0usize, 1, 3, 5] {
        let key = vec![0u8; bad];
        let_assert!(Err(MaskError::InvalidKeyLength(len)) = mask(b"data", &key));
        assert!(len == bad);

        // Empty input does not make a bad key acceptable.
        let_assert!(Err(MaskError::InvalidKeyLength(len)) = mask(b"", &key));
        assert!(len == bad);
    }
}

#[test]
fn matches_rfc_formula() {
    let key = rand::random::<[u8; KEY_LEN]>();
    let payload: Vec<u8> = (0..997).map(|_| rand::random()).collect();

    let_assert!(Ok(masked) = mask(&payload, &key));
    for (i, byte) in masked.iter().enumerate() {
        assert!(*byte == payload[i] ^ key[i % 4]);
    }
}
