use crate::crypto::cipher_types::OutputFormat;
use crate::crypto::error::CipherError;

/// Capability contract every block-cipher engine satisfies. Input text is
/// consumed one block at a time; each block is transformed independently.
pub trait BlockCipher {
    fn encrypt(&self, plain_text: &str, format: OutputFormat) -> Result<String, CipherError>;
    fn decrypt(&self, cipher_text: &str, format: OutputFormat) -> Result<String, CipherError>;

    /// Block length in plaintext characters per encrypt call.
    fn block_length(&self) -> usize;
}
