use crate::crypto::des_tables::{PC1, PC2, SHIFT_SCHEDULE};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{permute_bits, rotate_left};
use bitvec::prelude::*;

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key_bits: &BitSlice) -> Vec<BitVec> {
        assert_eq!(key_bits.len(), 64, "DES key must be 64 bits");

        // 1) PC-1: 64 key bits -> 56, split into the C and D halves
        let permuted = permute_bits(key_bits, &PC1);
        let (c_half, d_half) = permuted.split_at(28);
        let mut c = c_half.to_bitvec();
        let mut d = d_half.to_bitvec();

        // 2) Per round: rotate both halves, concatenate, compress via PC-2
        let mut round_keys = Vec::with_capacity(SHIFT_SCHEDULE.len());
        for &shift in &SHIFT_SCHEDULE {
            rotate_left(&mut c, shift);
            rotate_left(&mut d, shift);

            let mut cd = BitVec::with_capacity(56);
            cd.extend_from_bitslice(&c);
            cd.extend_from_bitslice(&d);

            round_keys.push(permute_bits(&cd, &PC2));
        }

        round_keys
    }
}
