use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::OutputFormat;
use symmetric_cipher::crypto::des::DES;

fn main() {
    let des = DES::new("8charkey").expect("valid 64-bit key");

    let plaintext = "MESSAGE!";
    let binary = des.encrypt(plaintext, OutputFormat::Binary).unwrap();
    println!("DES(\"{plaintext}\") = {binary}");

    let ciphertext = des.encrypt(plaintext, OutputFormat::Text).unwrap();
    let decrypted = des.decrypt(&ciphertext, OutputFormat::Text).unwrap();
    assert_eq!(decrypted, plaintext);
    println!("roundtrip OK");
}
