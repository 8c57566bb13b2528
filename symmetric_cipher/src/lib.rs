pub mod crypto;

pub use crypto::cipher_traits::BlockCipher;
pub use crypto::cipher_types::OutputFormat;
pub use crypto::error::CipherError;
