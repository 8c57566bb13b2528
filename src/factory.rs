use log::debug;
use rijndael::Rijndael;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::OutputFormat;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::error::CipherError;

/// Supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Aes,
    Des,
}

impl CipherKind {
    pub fn from_name(name: &str) -> Result<Self, CipherError> {
        match name {
            "AES" => Ok(CipherKind::Aes),
            "DES" => Ok(CipherKind::Des),
            _ => Err(CipherError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Block length in plaintext characters per encrypt call.
    pub fn block_length(&self) -> usize {
        match self {
            CipherKind::Aes => rijndael::rijndael::cipher::BLOCK_LENGTH,
            CipherKind::Des => symmetric_cipher::crypto::des::BLOCK_LENGTH,
        }
    }
}

/// An engine selected by algorithm. Dispatch is a plain `match` over the
/// variants, so per-block calls pay no virtual-call cost.
pub enum Cipher {
    Aes(Rijndael),
    Des(DES),
}

impl Cipher {
    pub fn new(kind: CipherKind, key: &str) -> Result<Self, CipherError> {
        debug!("constructing {kind:?} engine");
        match kind {
            CipherKind::Aes => Ok(Cipher::Aes(Rijndael::new(key)?)),
            CipherKind::Des => Ok(Cipher::Des(DES::new(key)?)),
        }
    }

    pub fn from_name(name: &str, key: &str) -> Result<Self, CipherError> {
        Cipher::new(CipherKind::from_name(name)?, key)
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Aes(_) => CipherKind::Aes,
            Cipher::Des(_) => CipherKind::Des,
        }
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cipher").field(&self.kind()).finish()
    }
}

impl BlockCipher for Cipher {
    fn encrypt(&self, plain_text: &str, format: OutputFormat) -> Result<String, CipherError> {
        match self {
            Cipher::Aes(engine) => engine.encrypt(plain_text, format),
            Cipher::Des(engine) => engine.encrypt(plain_text, format),
        }
    }

    fn decrypt(&self, cipher_text: &str, format: OutputFormat) -> Result<String, CipherError> {
        match self {
            Cipher::Aes(engine) => engine.decrypt(cipher_text, format),
            Cipher::Des(engine) => engine.decrypt(cipher_text, format),
        }
    }

    fn block_length(&self) -> usize {
        self.kind().block_length()
    }
}
