use hex_literal::hex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rijndael::rijndael::cipher::{Rijndael, decrypt_block, encrypt_block};
use rijndael::rijndael::key_schedule::expand_key;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::OutputFormat;
use symmetric_cipher::crypto::error::CipherError;

fn text_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn hex_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

#[test]
fn test_aes128_fips197_vector() {
    // FIPS-197 Appendix B
    let key = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    let plaintext = hex!("3243f6a8885a308d313198a2e0370734");
    let expected_cipher = hex!("3925841d02dc09fbdc118597196a0b32");

    let round_keys = expand_key(&key, 4, 10);
    let ciphertext = encrypt_block(&plaintext, &round_keys);
    assert_eq!(ciphertext, expected_cipher, "AES-128 encryption mismatch");

    let decrypted = decrypt_block(&ciphertext, &round_keys);
    assert_eq!(decrypted, plaintext, "AES-128 decryption failed to invert");
}

#[test]
fn test_aes128_zero_vector() {
    let round_keys = expand_key(&[0u8; 16], 4, 10);
    let ciphertext = encrypt_block(&[0u8; 16], &round_keys);
    assert_eq!(ciphertext, hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"));
}

#[test]
fn test_aes192_known_vector() {
    // NIST SP 800-38A ECB example
    let key = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
    let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
    let expected_cipher = hex!("bd334f1d6e45f25ff712a214571fa5cc");

    let round_keys = expand_key(&key, 6, 12);
    let ciphertext = encrypt_block(&plaintext, &round_keys);
    assert_eq!(ciphertext, expected_cipher, "AES-192 encryption mismatch");

    let decrypted = decrypt_block(&ciphertext, &round_keys);
    assert_eq!(decrypted, plaintext, "AES-192 decryption failed");
}

#[test]
fn test_aes256_known_vector() {
    // NIST SP 800-38A ECB example
    let key = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
    let expected_cipher = hex!("f3eed1bdb5d2a03c064b5a7e3db181f8");

    let round_keys = expand_key(&key, 8, 14);
    let ciphertext = encrypt_block(&plaintext, &round_keys);
    assert_eq!(ciphertext, expected_cipher, "AES-256 encryption mismatch");

    let decrypted = decrypt_block(&ciphertext, &round_keys);
    assert_eq!(decrypted, plaintext, "AES-256 decryption failed");
}

#[test]
fn test_encrypt_decrypt_random() {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    let mut key = [0u8; 32];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);

    let round_keys = expand_key(&key, 8, 14);
    let ciphertext = encrypt_block(&block, &round_keys);
    let decrypted = decrypt_block(&ciphertext, &round_keys);
    assert_eq!(decrypted, block, "random encrypt/decrypt failed");
}

#[test]
fn test_engine_hex_output_matches_block_functions() {
    let key = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    let plaintext = hex!("3243f6a8885a308d313198a2e0370734");
    let expected_cipher = hex!("3925841d02dc09fbdc118597196a0b32");

    let engine = Rijndael::new(&text_from_bytes(&key)).unwrap();
    let ciphertext = engine
        .encrypt(&text_from_bytes(&plaintext), OutputFormat::Text)
        .unwrap();
    assert_eq!(ciphertext, hex_from_bytes(&expected_cipher));

    let decrypted = engine.decrypt(&ciphertext, OutputFormat::Text).unwrap();
    assert_eq!(decrypted, text_from_bytes(&plaintext));
}

#[test]
fn test_engine_binary_output() {
    let engine = Rijndael::new("abcdefghijklmnop").unwrap();
    let ciphertext = engine
        .encrypt("ABCDEFGHIJKLMNOP", OutputFormat::Binary)
        .unwrap();

    assert_eq!(ciphertext.chars().count(), 128);
    assert!(ciphertext.chars().all(|c| c == '0' || c == '1'));
}

#[test]
fn test_engine_roundtrip_all_key_sizes() {
    let keys = [
        "abcdefghijklmnop",                 // 128
        "abcdefghijklmnopqrstuvwx",         // 192
        "abcdefghijklmnopqrstuvwxyz012345", // 256
    ];
    let plaintext = "Sixteen chars!!!";

    for key in keys {
        let engine = Rijndael::new(key).unwrap();
        let ciphertext = engine.encrypt(plaintext, OutputFormat::Text).unwrap();
        assert_eq!(ciphertext.chars().count(), 32);

        let decrypted = engine.decrypt(&ciphertext, OutputFormat::Text).unwrap();
        assert_eq!(decrypted, plaintext, "roundtrip failed for {} bit key", key.len() * 8);
    }
}

#[test]
fn test_engine_multi_block_roundtrip() {
    let engine = Rijndael::new("abcdefghijklmnop").unwrap();

    let plaintext = "Sixteen chars!!!Sixteen more!!!!";
    let ciphertext = engine.encrypt(plaintext, OutputFormat::Text).unwrap();
    assert_eq!(ciphertext.chars().count(), 64);

    let decrypted = engine.decrypt(&ciphertext, OutputFormat::Text).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_key_length_error() {
    assert_eq!(
        Rijndael::new("short key").unwrap_err(),
        CipherError::KeyLength {
            algorithm: "AES",
            expected: "128/192/256",
            actual: 72,
        }
    );
    assert_eq!(
        Rijndael::new("abcdefghijklmnopq").unwrap_err(),
        CipherError::KeyLength {
            algorithm: "AES",
            expected: "128/192/256",
            actual: 136,
        }
    );
}

#[test]
fn test_block_length_error() {
    let engine = Rijndael::new("abcdefghijklmnop").unwrap();

    assert_eq!(
        engine.encrypt("too short", OutputFormat::Text).unwrap_err(),
        CipherError::BlockLength {
            algorithm: "AES",
            required: 16,
            actual: 9,
        }
    );
    // decrypt consumes two hex characters per byte
    assert_eq!(
        engine.decrypt("AABBCC", OutputFormat::Text).unwrap_err(),
        CipherError::BlockLength {
            algorithm: "AES",
            required: 32,
            actual: 6,
        }
    );
}

#[test]
fn test_invalid_hex_digit_error() {
    let engine = Rijndael::new("abcdefghijklmnop").unwrap();

    let bad = "GG".repeat(16);
    assert_eq!(
        engine.decrypt(&bad, OutputFormat::Text).unwrap_err(),
        CipherError::InvalidHexDigit { digit: 'G' }
    );
}

#[test]
fn test_key_avalanche() {
    // 'p' and 'q' differ in a single bit
    let first = Rijndael::new("abcdefghijklmnop").unwrap();
    let second = Rijndael::new("abcdefghijklmnoq").unwrap();

    let plaintext = "Sixteen chars!!!";
    assert_ne!(
        first.encrypt(plaintext, OutputFormat::Text).unwrap(),
        second.encrypt(plaintext, OutputFormat::Text).unwrap()
    );
}
