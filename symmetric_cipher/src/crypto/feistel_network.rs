use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::xor_bits;
use bitvec::prelude::*;
use std::sync::Arc;

pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl std::fmt::Debug for FeistelNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeistelNetwork")
            .field("num_round", &self.num_round)
            .finish_non_exhaustive()
    }
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn encrypt_with_round_keys(&self, block: &BitSlice, round_keys: &[BitVec]) -> BitVec {
        self.run_rounds(block, round_keys, false)
    }

    /// Decryption runs the same rounds with the subkeys in reverse order:
    /// round `n` uses the subkey that round `num_round - 1 - n` used when
    /// encrypting.
    pub fn decrypt_with_round_keys(&self, block: &BitSlice, round_keys: &[BitVec]) -> BitVec {
        self.run_rounds(block, round_keys, true)
    }

    fn run_rounds(&self, block: &BitSlice, round_keys: &[BitVec], reverse: bool) -> BitVec {
        assert_eq!(block.len() % 2, 0, "block size must be even");
        assert_eq!(round_keys.len(), self.num_round, "one subkey per round");

        let (left_half, right_half) = block.split_at(block.len() / 2);
        let mut left = left_half.to_bitvec();
        let mut right = right_half.to_bitvec();

        for index in 0..self.num_round {
            let key = if reverse {
                &round_keys[self.num_round - 1 - index]
            } else {
                &round_keys[index]
            };
            let feistel_out = self.transformation.transform(&right, key);
            let new_right = xor_bits(&left, &feistel_out);
            left = right;
            right = new_right;
        }

        // the final half swap undoes the last round's exchange
        let mut output = right;
        output.extend_from_bitslice(&left);
        output
    }
}
