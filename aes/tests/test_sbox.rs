use rijndael::rijndael::sbox::{RC, S, SI};

#[test]
fn test_known_sbox_entries() {
    assert_eq!(S[0x00], 0x63);
    assert_eq!(S[0x01], 0x7c);
    assert_eq!(S[0x53], 0xed);
    assert_eq!(S[0xff], 0x16);
}

#[test]
fn test_known_inverse_sbox_entries() {
    assert_eq!(SI[0x63], 0x00);
    assert_eq!(SI[0x7c], 0x01);
    assert_eq!(SI[0xed], 0x53);
}

#[test]
fn test_sboxes_are_mutual_inverses() {
    for x in 0..=255u8 {
        assert_eq!(SI[S[x as usize] as usize], x);
        assert_eq!(S[SI[x as usize] as usize], x);
    }
}

#[test]
fn test_sbox_is_a_permutation() {
    let mut seen = [false; 256];
    for &value in S.iter() {
        assert!(!seen[value as usize]);
        seen[value as usize] = true;
    }
}

#[test]
fn test_round_constants() {
    let expected: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];
    assert_eq!(RC[1..=10], expected);
}
