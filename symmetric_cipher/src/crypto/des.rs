use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::OutputFormat;
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{bits_to_binary_string, bits_to_text, permute_bits, text_to_bits};
use bitvec::prelude::*;
use log::debug;
use std::sync::Arc;

pub const BLOCK_LENGTH: usize = 8;

const BITS_PER_CHAR: usize = 8;
const KEY_BITS: usize = 64;
const BLOCK_BITS: usize = 64;
const ROUNDS: usize = 16;

/// DES engine. The 16 round subkeys are derived once at construction and
/// immutable afterwards; each encrypt/decrypt call builds a fresh block
/// from the caller's text.
#[derive(Debug)]
pub struct DES {
    feistel_network: FeistelNetwork,
    round_keys: Vec<BitVec>,
}

impl DES {
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let key_bits = text_to_bits(key, BITS_PER_CHAR);
        if key_bits.len() != KEY_BITS {
            return Err(CipherError::KeyLength {
                algorithm: "DES",
                expected: "64",
                actual: key_bits.len(),
            });
        }

        let round_keys = DesKeyExpansion.generate_round_keys(&key_bits);
        debug!("DES: derived {} round subkeys", round_keys.len());

        Ok(DES {
            feistel_network: FeistelNetwork::new(ROUNDS, Arc::new(DesTransformation)),
            round_keys,
        })
    }

    /// IP -> 16 Feistel rounds -> half swap -> FP over one 64-bit block.
    fn process_block(&self, block: &BitSlice, decrypt: bool) -> BitVec {
        let permuted = permute_bits(block, &IP);
        let mixed = if decrypt {
            self.feistel_network
                .decrypt_with_round_keys(&permuted, &self.round_keys)
        } else {
            self.feistel_network
                .encrypt_with_round_keys(&permuted, &self.round_keys)
        };
        permute_bits(&mixed, &FP)
    }

    fn process(
        &self,
        text: &str,
        format: OutputFormat,
        decrypt: bool,
    ) -> Result<String, CipherError> {
        let bits = text_to_bits(text, BITS_PER_CHAR);
        if bits.is_empty() || bits.len() % BLOCK_BITS != 0 {
            return Err(CipherError::BlockLength {
                algorithm: "DES",
                required: BLOCK_LENGTH,
                actual: bits.len() / BITS_PER_CHAR,
            });
        }

        let mut output = String::new();
        for block in bits.chunks(BLOCK_BITS) {
            let result = self.process_block(block, decrypt);
            match format {
                OutputFormat::Binary => output.push_str(&bits_to_binary_string(&result)),
                OutputFormat::Text => output.push_str(&bits_to_text(&result, BITS_PER_CHAR)),
            }
        }
        Ok(output)
    }
}

impl BlockCipher for DES {
    fn encrypt(&self, plain_text: &str, format: OutputFormat) -> Result<String, CipherError> {
        self.process(plain_text, format, false)
    }

    fn decrypt(&self, cipher_text: &str, format: OutputFormat) -> Result<String, CipherError> {
        self.process(cipher_text, format, true)
    }

    fn block_length(&self) -> usize {
        BLOCK_LENGTH
    }
}
