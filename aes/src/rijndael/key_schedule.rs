use crate::rijndael::cipher::State;
use crate::rijndael::sbox::{RC, S};
use log::debug;

pub(crate) const MAX_KEY_COLUMNS: usize = 8;

/// Round counts indexed by [(keyColumns - 4) / 2][(blockColumns - 4) / 2].
const NUM_ROUNDS: [[usize; 3]; 3] = [
    [10, 12, 14],
    [12, 12, 14],
    [14, 14, 14],
];

pub fn num_rounds(key_columns: usize, block_columns: usize) -> usize {
    NUM_ROUNDS[(key_columns - 4) / 2][(block_columns - 4) / 2]
}

/// Derives the `rounds + 1` round keys from the raw key bytes. The key is
/// arranged column-major into a 4 x keyColumns working matrix; each step
/// substitutes and rotates the previous group's last column into the first
/// column (XORing a round constant on row 0), propagates XORs across the
/// remaining columns, and emits 4-byte columns until the schedule is full.
/// 256-bit keys substitute once more at the midpoint column.
pub fn expand_key(key: &[u8], key_columns: usize, rounds: usize) -> Vec<State> {
    assert_eq!(key.len(), key_columns * 4, "key byte count must fill the matrix");

    let mut temp = [[0u8; MAX_KEY_COLUMNS]; 4];
    for j in 0..key_columns {
        for i in 0..4 {
            temp[i][j] = key[j * 4 + i];
        }
    }

    let total_columns = (rounds + 1) * 4;
    let mut round_keys = vec![[[0u8; 4]; 4]; rounds + 1];
    let mut t_pointer = 0;
    let mut r_pointer = 1;

    copy_columns(&mut round_keys, &temp, key_columns, total_columns, &mut t_pointer);

    while t_pointer < total_columns {
        for i in 0..4 {
            temp[i][0] ^= S[temp[(i + 1) % 4][key_columns - 1] as usize];
        }
        temp[0][0] ^= RC[r_pointer];
        r_pointer += 1;

        if key_columns <= 6 {
            for j in 1..key_columns {
                for i in 0..4 {
                    temp[i][j] ^= temp[i][j - 1];
                }
            }
        } else {
            for j in 1..4 {
                for i in 0..4 {
                    temp[i][j] ^= temp[i][j - 1];
                }
            }
            for i in 0..4 {
                temp[i][4] ^= S[temp[i][3] as usize];
            }
            for j in 5..key_columns {
                for i in 0..4 {
                    temp[i][j] ^= temp[i][j - 1];
                }
            }
        }

        copy_columns(&mut round_keys, &temp, key_columns, total_columns, &mut t_pointer);
    }

    debug!("AES: expanded key into {} round keys", round_keys.len());
    round_keys
}

/// Copies up to `key_columns` generated columns into the round-key
/// sequence, 4 columns per round key.
fn copy_columns(
    round_keys: &mut [State],
    temp: &[[u8; MAX_KEY_COLUMNS]; 4],
    key_columns: usize,
    total_columns: usize,
    t_pointer: &mut usize,
) {
    let mut pointer = 0;
    while pointer < key_columns && *t_pointer < total_columns {
        for i in 0..4 {
            round_keys[*t_pointer / 4][i][*t_pointer % 4] = temp[i][pointer];
        }
        pointer += 1;
        *t_pointer += 1;
    }
}
