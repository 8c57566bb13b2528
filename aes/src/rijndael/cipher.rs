use crate::gf::arithmetic::gf_mul;
use crate::rijndael::key_schedule::{expand_key, num_rounds};
use crate::rijndael::sbox::{S, SI};
use log::debug;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::OutputFormat;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::{char_to_code, to_binary};

pub const BLOCK_LENGTH: usize = 16;

const BLOCK_COLUMNS: usize = 4;

/// Block state and round-key shape: a 4x4 byte matrix `state[row][column]`,
/// filled column by column from the input bytes.
pub type State = [[u8; 4]; 4];

/// Row-shift offsets per block size (4, 6 or 8 columns) and row.
const SHIFTS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 1, 2, 3], [0, 1, 3, 4]];

fn row_shift(block_columns: usize, row: usize) -> usize {
    SHIFTS[(block_columns - 4) / 2][row]
}

fn block_to_state(block: &[u8; BLOCK_LENGTH]) -> State {
    let mut state = [[0u8; 4]; 4];
    let mut counter = 0;
    for j in 0..BLOCK_COLUMNS {
        for i in 0..4 {
            state[i][j] = block[counter];
            counter += 1;
        }
    }
    state
}

fn state_to_block(state: &State) -> [u8; BLOCK_LENGTH] {
    let mut block = [0u8; BLOCK_LENGTH];
    let mut counter = 0;
    for j in 0..BLOCK_COLUMNS {
        for i in 0..4 {
            block[counter] = state[i][j];
            counter += 1;
        }
    }
    block
}

fn add_round_key(state: &mut State, round_key: &State) {
    for i in 0..4 {
        for j in 0..BLOCK_COLUMNS {
            state[i][j] ^= round_key[i][j];
        }
    }
}

fn sub_bytes(state: &mut State, sbox: &[u8; 256]) {
    for row in state.iter_mut() {
        for byte in row.iter_mut() {
            *byte = sbox[*byte as usize];
        }
    }
}

fn shift_rows(state: &mut State) {
    for i in 1..4 {
        let shift = row_shift(BLOCK_COLUMNS, i);
        let mut tmp = [0u8; BLOCK_COLUMNS];
        for j in 0..BLOCK_COLUMNS {
            tmp[j] = state[i][(j + shift) % BLOCK_COLUMNS];
        }
        state[i] = tmp;
    }
}

fn inv_shift_rows(state: &mut State) {
    for i in 1..4 {
        let shift = row_shift(BLOCK_COLUMNS, i);
        let mut tmp = [0u8; BLOCK_COLUMNS];
        for j in 0..BLOCK_COLUMNS {
            tmp[j] = state[i][(BLOCK_COLUMNS + j - shift) % BLOCK_COLUMNS];
        }
        state[i] = tmp;
    }
}

/// Multiplies every column by the fixed polynomial {03}x³ + {01}x² +
/// {01}x + {02} in GF(256).
fn mix_columns(state: &mut State) {
    let mut tmp = [[0u8; BLOCK_COLUMNS]; 4];
    for j in 0..BLOCK_COLUMNS {
        for i in 0..4 {
            tmp[i][j] = gf_mul(2, state[i][j])
                ^ gf_mul(3, state[(i + 1) % 4][j])
                ^ state[(i + 2) % 4][j]
                ^ state[(i + 3) % 4][j];
        }
    }
    *state = tmp;
}

/// Inverse of [`mix_columns`]: coefficients {0e}, {0b}, {0d}, {09}.
fn inv_mix_columns(state: &mut State) {
    let mut tmp = [[0u8; BLOCK_COLUMNS]; 4];
    for j in 0..BLOCK_COLUMNS {
        for i in 0..4 {
            tmp[i][j] = gf_mul(0x0e, state[i][j])
                ^ gf_mul(0x0b, state[(i + 1) % 4][j])
                ^ gf_mul(0x0d, state[(i + 2) % 4][j])
                ^ gf_mul(0x09, state[(i + 3) % 4][j]);
        }
    }
    *state = tmp;
}

pub fn encrypt_block(block: &[u8; BLOCK_LENGTH], round_keys: &[State]) -> [u8; BLOCK_LENGTH] {
    let mut state = block_to_state(block);
    let rounds = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);
    for round in 1..rounds {
        sub_bytes(&mut state, &S);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[round]);
    }
    sub_bytes(&mut state, &S);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds]);

    state_to_block(&state)
}

pub fn decrypt_block(block: &[u8; BLOCK_LENGTH], round_keys: &[State]) -> [u8; BLOCK_LENGTH] {
    let mut state = block_to_state(block);
    let rounds = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[rounds]);
    inv_shift_rows(&mut state);
    sub_bytes(&mut state, &SI);
    for round in (1..rounds).rev() {
        add_round_key(&mut state, &round_keys[round]);
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        sub_bytes(&mut state, &SI);
    }
    add_round_key(&mut state, &round_keys[0]);

    state_to_block(&state)
}

/// AES engine. The round-key schedule is computed once at construction and
/// immutable afterwards; each call processes independent 16-byte blocks.
#[derive(Debug)]
pub struct Rijndael {
    round_keys: Vec<State>,
}

impl Rijndael {
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let key_bytes: Vec<u8> = key.chars().map(|c| char_to_code(c) as u8).collect();
        let key_length = key_bytes.len() * 8;
        let key_columns = match key_length {
            128 => 4,
            192 => 6,
            256 => 8,
            _ => {
                return Err(CipherError::KeyLength {
                    algorithm: "AES",
                    expected: "128/192/256",
                    actual: key_length,
                });
            }
        };

        let rounds = num_rounds(key_columns, BLOCK_COLUMNS);
        debug!("AES-{key_length}: {rounds} rounds");

        Ok(Rijndael {
            round_keys: expand_key(&key_bytes, key_columns, rounds),
        })
    }
}

impl BlockCipher for Rijndael {
    fn encrypt(&self, plain_text: &str, format: OutputFormat) -> Result<String, CipherError> {
        let bytes: Vec<u8> = plain_text.chars().map(|c| char_to_code(c) as u8).collect();
        if bytes.is_empty() || bytes.len() % BLOCK_LENGTH != 0 {
            return Err(CipherError::BlockLength {
                algorithm: "AES",
                required: BLOCK_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut output = String::new();
        for chunk in bytes.chunks(BLOCK_LENGTH) {
            let mut block = [0u8; BLOCK_LENGTH];
            block.copy_from_slice(chunk);
            for byte in encrypt_block(&block, &self.round_keys) {
                match format {
                    OutputFormat::Text => output.push_str(&format!("{byte:02X}")),
                    OutputFormat::Binary => output.push_str(&to_binary(byte as u32, 8)),
                }
            }
        }
        Ok(output)
    }

    /// Cipher text is hexadecimal, two characters per byte.
    fn decrypt(&self, cipher_text: &str, format: OutputFormat) -> Result<String, CipherError> {
        let digits: Vec<char> = cipher_text.chars().collect();
        if digits.is_empty() || digits.len() % (2 * BLOCK_LENGTH) != 0 {
            return Err(CipherError::BlockLength {
                algorithm: "AES",
                required: 2 * BLOCK_LENGTH,
                actual: digits.len(),
            });
        }

        let mut bytes = Vec::with_capacity(digits.len() / 2);
        for pair in digits.chunks(2) {
            bytes.push((hex_value(pair[0])? << 4) | hex_value(pair[1])?);
        }

        let mut output = String::new();
        for chunk in bytes.chunks(BLOCK_LENGTH) {
            let mut block = [0u8; BLOCK_LENGTH];
            block.copy_from_slice(chunk);
            for byte in decrypt_block(&block, &self.round_keys) {
                match format {
                    OutputFormat::Text => output.push(byte as char),
                    OutputFormat::Binary => output.push_str(&to_binary(byte as u32, 8)),
                }
            }
        }
        Ok(output)
    }

    fn block_length(&self) -> usize {
        BLOCK_LENGTH
    }
}

fn hex_value(digit: char) -> Result<u8, CipherError> {
    digit
        .to_digit(16)
        .map(|value| value as u8)
        .ok_or(CipherError::InvalidHexDigit { digit })
}
