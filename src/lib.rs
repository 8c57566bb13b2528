pub mod factory;

pub use factory::{Cipher, CipherKind};
pub use rijndael::Rijndael;
pub use symmetric_cipher::crypto::des::DES;
pub use symmetric_cipher::{BlockCipher, CipherError, OutputFormat};
