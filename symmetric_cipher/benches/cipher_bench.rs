use criterion::{Criterion, criterion_group, criterion_main};
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::OutputFormat;
use symmetric_cipher::crypto::des::DES;

fn bench_des(c: &mut Criterion) {
    let des = DES::new("8charkey").unwrap();
    let ciphertext = des.encrypt("MESSAGE!", OutputFormat::Text).unwrap();

    c.bench_function("des encrypt block", |b| {
        b.iter(|| des.encrypt("MESSAGE!", OutputFormat::Text).unwrap())
    });

    c.bench_function("des decrypt block", |b| {
        b.iter(|| des.decrypt(&ciphertext, OutputFormat::Text).unwrap())
    });

    c.bench_function("des key schedule", |b| {
        b.iter(|| DES::new("8charkey").unwrap())
    });
}

criterion_group!(benches, bench_des);
criterion_main!(benches);
