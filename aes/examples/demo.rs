use rijndael::Rijndael;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::OutputFormat;

fn main() {
    let aes = Rijndael::new("abcdefghijklmnop").expect("valid 128-bit key");

    let plaintext = "Block of sixteen";
    let ciphertext = aes.encrypt(plaintext, OutputFormat::Text).unwrap();
    println!("AES(\"{plaintext}\") = {ciphertext}");

    let decrypted = aes.decrypt(&ciphertext, OutputFormat::Text).unwrap();
    assert_eq!(decrypted, plaintext);
    println!("roundtrip OK");
}
