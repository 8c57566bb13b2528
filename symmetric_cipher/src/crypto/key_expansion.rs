use bitvec::prelude::*;

pub trait KeyExpansion {
    fn generate_round_keys(&self, key_bits: &BitSlice) -> Vec<BitVec>;
}
