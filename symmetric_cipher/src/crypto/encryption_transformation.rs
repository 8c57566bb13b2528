use bitvec::prelude::*;

pub trait EncryptionTransformation {
    fn transform(&self, input_block: &BitSlice, round_key: &BitSlice) -> BitVec;
}
