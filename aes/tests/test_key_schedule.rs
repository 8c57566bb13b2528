use hex_literal::hex;
use rijndael::rijndael::cipher::State;
use rijndael::rijndael::key_schedule::{expand_key, num_rounds};

/// Builds a 4x4 round-key matrix from 16 bytes in column-major order, the
/// same fill order the schedule emits.
fn state_from_bytes(bytes: &[u8; 16]) -> State {
    let mut state = [[0u8; 4]; 4];
    let mut counter = 0;
    for j in 0..4 {
        for i in 0..4 {
            state[i][j] = bytes[counter];
            counter += 1;
        }
    }
    state
}

#[test]
fn test_round_counts() {
    assert_eq!(num_rounds(4, 4), 10);
    assert_eq!(num_rounds(6, 4), 12);
    assert_eq!(num_rounds(8, 4), 14);
}

#[test]
fn test_aes128_schedule_known_words() {
    // FIPS-197 Appendix A.1 key expansion example
    let key = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    let round_keys = expand_key(&key, 4, 10);

    assert_eq!(round_keys.len(), 11);
    // round key 0 is the raw key
    assert_eq!(round_keys[0], state_from_bytes(&key));
    // words w4..w7
    assert_eq!(
        round_keys[1],
        state_from_bytes(&hex!("a0fafe1788542cb123a339392a6c7605"))
    );
    // words w40..w43
    assert_eq!(
        round_keys[10],
        state_from_bytes(&hex!("d014f9a8c9ee2589e13f0cc8b6630ca6"))
    );
}

#[test]
fn test_aes192_schedule_shape() {
    let key = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
    let round_keys = expand_key(&key, 6, 12);

    assert_eq!(round_keys.len(), 13);
    // the first 6 words seed the schedule: round key 1 starts at word 4,
    // so its first two columns still hold raw key material
    assert_eq!(round_keys[0], state_from_bytes(&key[..16].try_into().unwrap()));
}

#[test]
fn test_aes256_schedule_shape() {
    let key = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let round_keys = expand_key(&key, 8, 14);

    assert_eq!(round_keys.len(), 15);
    assert_eq!(round_keys[0], state_from_bytes(&key[..16].try_into().unwrap()));
    assert_eq!(round_keys[1], state_from_bytes(&key[16..].try_into().unwrap()));
}
