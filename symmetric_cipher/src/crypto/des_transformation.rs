use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{permute_bits, xor_bits};
use bitvec::prelude::*;

pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, input_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        // 1. Expansion: 32 -> 48 bits
        let expanded = permute_bits(input_block, &E);

        // 2. XOR with the round subkey
        let mixed = xor_bits(&expanded, round_key);

        // 3. S-boxes: the outer two bits of each 6-bit group select the
        //    row, the inner four the column
        let mut substituted = BitVec::with_capacity(32);
        for (box_index, group) in mixed.chunks(6).enumerate() {
            let row = ((group[0] as usize) << 1) | group[5] as usize;
            let col = (1..5).fold(0, |acc, i| (acc << 1) | group[i] as usize);
            let value = S_BOXES[box_index][row * 16 + col];
            for bit in (0..4).rev() {
                substituted.push((value >> bit) & 1 == 1);
            }
        }

        // 4. P-permutation
        permute_bits(&substituted, &P)
    }
}
